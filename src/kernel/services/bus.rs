//! Typed publish/subscribe for the store's outward notifications.
//!
//! Listeners run synchronously, in subscription order, on the caller's stack.
//! They only ever see shared references, so they cannot re-enter a mutating
//! store call.

use crate::kernel::services::ports::vfs::FileModified;
use crate::kernel::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    StateChange,
    FocusChange,
    FileModified,
}

impl Topic {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::StateChange => "state:change",
            Self::FocusChange => "focus:change",
            Self::FileModified => "file:modified",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId {
    topic: Topic,
    seq: u64,
}

impl SubscriptionId {
    pub fn topic(&self) -> Topic {
        self.topic
    }
}

type StateListener = Box<dyn FnMut(&AppState)>;
type FocusListener = Box<dyn FnMut(&str)>;
type FileListener = Box<dyn FnMut(&FileModified)>;

#[derive(Default)]
pub struct EventBus {
    next_seq: u64,
    state_change: Vec<(SubscriptionId, StateListener)>,
    focus_change: Vec<(SubscriptionId, FocusListener)>,
    file_modified: Vec<(SubscriptionId, FileListener)>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&mut self, topic: Topic) -> SubscriptionId {
        self.next_seq += 1;
        SubscriptionId {
            topic,
            seq: self.next_seq,
        }
    }

    pub fn on_state_change<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&AppState) + 'static,
    {
        let id = self.next_id(Topic::StateChange);
        self.state_change.push((id, Box::new(listener)));
        id
    }

    pub fn on_focus_change<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&str) + 'static,
    {
        let id = self.next_id(Topic::FocusChange);
        self.focus_change.push((id, Box::new(listener)));
        id
    }

    pub fn on_file_modified<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&FileModified) + 'static,
    {
        let id = self.next_id(Topic::FileModified);
        self.file_modified.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        fn remove<L>(listeners: &mut Vec<(SubscriptionId, L)>, id: SubscriptionId) -> bool {
            let before = listeners.len();
            listeners.retain(|(sub, _)| *sub != id);
            listeners.len() != before
        }

        match id.topic {
            Topic::StateChange => remove(&mut self.state_change, id),
            Topic::FocusChange => remove(&mut self.focus_change, id),
            Topic::FileModified => remove(&mut self.file_modified, id),
        }
    }

    pub fn listener_count(&self, topic: Topic) -> usize {
        match topic {
            Topic::StateChange => self.state_change.len(),
            Topic::FocusChange => self.focus_change.len(),
            Topic::FileModified => self.file_modified.len(),
        }
    }

    pub fn clear(&mut self) {
        self.state_change.clear();
        self.focus_change.clear();
        self.file_modified.clear();
    }

    pub fn emit_state_change(&mut self, state: &AppState) {
        tracing::trace!(listeners = self.state_change.len(), topic = Topic::StateChange.as_str());
        for (_, listener) in self.state_change.iter_mut() {
            listener(state);
        }
    }

    pub fn emit_focus_change(&mut self, path: &str) {
        tracing::trace!(listeners = self.focus_change.len(), topic = Topic::FocusChange.as_str());
        for (_, listener) in self.focus_change.iter_mut() {
            listener(path);
        }
    }

    pub fn emit_file_modified(&mut self, event: &FileModified) {
        tracing::trace!(listeners = self.file_modified.len(), topic = Topic::FileModified.as_str());
        for (_, listener) in self.file_modified.iter_mut() {
            listener(event);
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/services/bus.rs"]
mod tests;
