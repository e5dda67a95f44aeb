//! Selected-symptom set with a render-notification hook.
//!
//! Uniqueness is by exact string equality; iteration order is insertion order,
//! which is display order and the join order for the analyze payload. All
//! mutation happens in synchronous event-handler bodies, so the registered
//! hook fires before the mutating call returns and no intermediate state is
//! observable.

/// Callback invoked with the current members after every mutation.
pub type SelectionObserver = Box<dyn FnMut(&[String])>;

/// In-memory set of selected symptom identifiers.
///
/// Backed by a `Vec` rather than a hash set: membership checks are over a
/// handful of user-picked symptoms, and insertion order must survive.
#[derive(Default)]
pub struct SelectionStore {
    members: Vec<String>,
    observer: Option<SelectionObserver>,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the single UI-sync hook. Replaces any previous observer
    /// and immediately syncs it with the current members.
    pub fn set_observer(&mut self, mut observer: SelectionObserver) {
        observer(&self.members);
        self.observer = Some(observer);
    }

    /// If present, remove; else insert at the end. Notifies the observer.
    pub fn toggle(&mut self, id: &str) {
        match self.members.iter().position(|m| m == id) {
            Some(idx) => {
                self.members.remove(idx);
            }
            None => self.members.push(id.to_string()),
        }
        self.notify();
    }

    /// Remove without toggling (the × affordance on a selected badge).
    /// No-op if absent, but still notifies so the view stays in sync.
    pub fn remove(&mut self, id: &str) {
        self.members.retain(|m| m != id);
        self.notify();
    }

    /// Empty the set. Notifies the observer.
    pub fn clear(&mut self) {
        self.members.clear();
        self.notify();
    }

    pub fn contains(&self, id: &str) -> bool {
        self.members.iter().any(|m| m == id)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Members in insertion order. Restartable — each call yields a fresh
    /// iterator over the current membership.
    pub fn members(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(String::as_str)
    }

    /// Members joined with `", "` in insertion order — the exact payload
    /// text for analyzing the current selection.
    pub fn joined(&self) -> String {
        self.members.join(", ")
    }

    fn notify(&mut self) {
        if let Some(observer) = self.observer.as_mut() {
            observer(&self.members);
        }
    }
}
