//! Slash-separated virtual paths.
//!
//! Virtual paths are always absolute and use `/` regardless of the host OS,
//! so `std::path` is deliberately not used here.

pub const SEPARATOR: char = '/';

/// Joins `name` onto `dir` with exactly one separator between them.
pub fn join(dir: &str, name: &str) -> String {
    let name = name.trim_start_matches(SEPARATOR);
    if dir.ends_with(SEPARATOR) {
        format!("{dir}{name}")
    } else {
        format!("{dir}{SEPARATOR}{name}")
    }
}

pub fn dirname(path: &str) -> &str {
    let trimmed = trim_trailing(path);
    match trimmed.rfind(SEPARATOR) {
        Some(0) => "/",
        Some(idx) => &trimmed[..idx],
        None => ".",
    }
}

pub fn basename(path: &str) -> &str {
    let trimmed = trim_trailing(path);
    match trimmed.rfind(SEPARATOR) {
        Some(idx) => &trimmed[idx + 1..],
        None => trimmed,
    }
}

/// Extension of the last segment without the leading dot.
///
/// Dotfiles such as `.babelrc` have no extension.
pub fn extname(path: &str) -> Option<&str> {
    let name = basename(path);
    match name.rfind('.') {
        Some(0) | None => None,
        Some(idx) => Some(&name[idx + 1..]),
    }
}

pub fn has_extension(path: &str, ext: &str) -> bool {
    extname(path) == Some(ext.trim_start_matches('.'))
}

/// Collapses duplicate separators, drops `.` segments and any trailing
/// separator. Returns `None` for relative paths or paths that climb with `..`.
pub fn normalize(path: &str) -> Option<String> {
    if !path.starts_with(SEPARATOR) {
        return None;
    }

    let mut out = String::with_capacity(path.len());
    for segment in path.split(SEPARATOR) {
        match segment {
            "" | "." => continue,
            ".." => return None,
            _ => {
                out.push(SEPARATOR);
                out.push_str(segment);
            }
        }
    }

    if out.is_empty() {
        out.push(SEPARATOR);
    }
    Some(out)
}

/// Path of `path` relative to `root`, without a leading separator.
///
/// `root` itself maps to the empty string.
pub fn strip_root<'a>(path: &'a str, root: &str) -> Option<&'a str> {
    let root = trim_trailing(root);
    let rest = path.strip_prefix(root)?;
    if rest.is_empty() {
        return Some("");
    }
    if root != "/" && !rest.starts_with(SEPARATOR) {
        return None;
    }
    Some(rest.trim_start_matches(SEPARATOR))
}

pub fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split(SEPARATOR).filter(|s| !s.is_empty())
}

fn trim_trailing(path: &str) -> &str {
    let trimmed = path.trim_end_matches(SEPARATOR);
    if trimmed.is_empty() && path.starts_with(SEPARATOR) {
        "/"
    } else {
        trimmed
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/vpath.rs"]
mod tests;
