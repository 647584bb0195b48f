//! Keeps an expanded sheet reachable through back navigation.
//!
//! While a sheet is expanded, exactly one navigation entry tagged with the
//! sheet's key sits on top of the stack, so a back gesture collapses the
//! sheet instead of leaving the screen.

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::NavigationError;

/// A navigation stack that can carry per-entry sheet markers.
///
/// Browser history is the main implementation; [`MemoryHistory`] serves
/// tests and hosts without a back gesture.
pub trait NavigationStack {
    /// Push a new entry tagged with `key`.
    fn push_marker(&self, key: &str) -> Result<(), NavigationError>;
    /// Marker of the current entry, if it has one.
    fn current_marker(&self) -> Option<String>;
    /// Go back one entry.
    fn back(&self) -> Result<(), NavigationError>;
}

/// What the bridge did to the navigation stack.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HistorySync {
    Pushed,
    AlreadyMarked,
    Popped,
    /// No entry to pop, or the current entry is not ours.
    Skipped,
    Failed(NavigationError),
}

/// Per-sheet marker bookkeeping on top of a [`NavigationStack`].
#[derive(Debug)]
pub struct HistoryBridge<N> {
    key: String,
    nav: N,
    marked: bool,
}

impl<N: NavigationStack> HistoryBridge<N> {
    pub fn new(key: impl Into<String>, nav: N) -> Self {
        Self {
            key: key.into(),
            nav,
            marked: false,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn nav(&self) -> &N {
        &self.nav
    }

    /// Whether this sheet believes its marker is on the stack.
    pub fn is_marked(&self) -> bool {
        self.marked
    }

    /// Called on entry to the expanded state.
    pub fn enter(&mut self) -> HistorySync {
        if self.marked {
            return HistorySync::AlreadyMarked;
        }
        match self.nav.push_marker(&self.key) {
            Ok(()) => {
                self.marked = true;
                HistorySync::Pushed
            }
            Err(e) => HistorySync::Failed(e),
        }
    }

    /// Called when the sheet leaves the expanded state through an in-app
    /// action. Goes back only if the current entry carries our marker.
    pub fn leave(&mut self) -> HistorySync {
        if !std::mem::take(&mut self.marked) {
            return HistorySync::Skipped;
        }
        if self.nav.current_marker().as_deref() != Some(self.key.as_str()) {
            return HistorySync::Skipped;
        }
        match self.nav.back() {
            Ok(()) => HistorySync::Popped,
            Err(e) => HistorySync::Failed(e),
        }
    }

    /// Called on a popstate. Returns `true` when our marker was consumed by
    /// the browser, in which case the sheet should collapse without touching
    /// history again.
    pub fn popped(&mut self, current_marker: Option<&str>) -> bool {
        if self.marked && current_marker != Some(self.key.as_str()) {
            self.marked = false;
            return true;
        }
        false
    }
}

// ============================================================================
// MemoryHistory
// ============================================================================

#[derive(Debug, Default)]
struct MemoryStack {
    entries: Vec<Option<String>>,
    index: usize,
    pending_pops: usize,
}

/// In-memory navigation stack. Clones share the same stack.
#[derive(Clone, Debug)]
pub struct MemoryHistory {
    inner: Rc<RefCell<MemoryStack>>,
}

impl MemoryHistory {
    /// A stack holding one unmarked entry (the page itself).
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(MemoryStack {
                entries: vec![None],
                index: 0,
                pending_pops: 0,
            })),
        }
    }

    /// Number of entries up to and including the current one.
    pub fn depth(&self) -> usize {
        self.inner.borrow().index + 1
    }

    /// How many live entries carry `key`.
    pub fn marker_count(&self, key: &str) -> usize {
        let stack = self.inner.borrow();
        stack.entries[..=stack.index]
            .iter()
            .filter(|m| m.as_deref() == Some(key))
            .count()
    }

    /// Simulate the user pressing back. Returns the new current marker.
    pub fn user_back(&self) -> Option<String> {
        let mut stack = self.inner.borrow_mut();
        if stack.index > 0 {
            stack.index -= 1;
        }
        stack.entries[stack.index].clone()
    }

    /// Popstate events produced by [`NavigationStack::back`] that the host
    /// has not delivered yet.
    pub fn take_pending_pops(&self) -> usize {
        std::mem::take(&mut self.inner.borrow_mut().pending_pops)
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigationStack for MemoryHistory {
    fn push_marker(&self, key: &str) -> Result<(), NavigationError> {
        let mut stack = self.inner.borrow_mut();
        let next = stack.index + 1;
        stack.entries.truncate(next);
        stack.entries.push(Some(key.to_string()));
        stack.index = next;
        Ok(())
    }

    fn current_marker(&self) -> Option<String> {
        let stack = self.inner.borrow();
        stack.entries[stack.index].clone()
    }

    fn back(&self) -> Result<(), NavigationError> {
        let mut stack = self.inner.borrow_mut();
        if stack.index == 0 {
            return Err(NavigationError::Rejected("already at first entry".to_string()));
        }
        stack.index -= 1;
        stack.pending_pops += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_leave_balances_stack() {
        let nav = MemoryHistory::new();
        let mut bridge = HistoryBridge::new("place", nav.clone());

        assert_eq!(bridge.enter(), HistorySync::Pushed);
        assert_eq!(bridge.enter(), HistorySync::AlreadyMarked);
        assert_eq!(nav.depth(), 2);
        assert_eq!(nav.marker_count("place"), 1);

        assert_eq!(bridge.leave(), HistorySync::Popped);
        assert_eq!(nav.depth(), 1);
        assert_eq!(nav.marker_count("place"), 0);
        assert_eq!(bridge.leave(), HistorySync::Skipped);
    }

    #[test]
    fn test_leave_skips_foreign_entry() {
        let nav = MemoryHistory::new();
        let mut bridge = HistoryBridge::new("profile", nav.clone());
        bridge.enter();
        nav.push_marker("other").unwrap();

        assert_eq!(bridge.leave(), HistorySync::Skipped);
        assert_eq!(nav.depth(), 3);
        assert!(!bridge.is_marked());
    }

    #[test]
    fn test_popped_ignores_other_sheets() {
        let nav = MemoryHistory::new();
        let mut a = HistoryBridge::new("a", nav.clone());
        let mut b = HistoryBridge::new("b", nav.clone());
        a.enter();
        b.enter();

        let current = nav.user_back();
        assert!(!a.popped(current.as_deref()));
        assert!(b.popped(current.as_deref()));

        let current = nav.user_back();
        assert!(a.popped(current.as_deref()));
    }

    #[test]
    fn test_back_at_root_fails() {
        let nav = MemoryHistory::new();
        assert!(nav.back().is_err());
        assert_eq!(nav.take_pending_pops(), 0);
    }
}
