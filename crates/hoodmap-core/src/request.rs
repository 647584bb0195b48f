//! Stale-response guard for async loads tied to a view.
//!
//! Every load takes a [`RequestToken`]; starting a newer load or closing the
//! view supersedes older tokens, and a response is applied only while its
//! token is still current.

/// Identifies one load. Tokens increase monotonically.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

/// Issues tokens and remembers which one is current.
#[derive(Clone, Copy, Debug, Default)]
pub struct RequestTracker {
    issued: u64,
    current: Option<u64>,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a load, superseding any earlier one.
    pub fn begin(&mut self) -> RequestToken {
        self.issued += 1;
        self.current = Some(self.issued);
        RequestToken(self.issued)
    }

    /// Supersede every outstanding load (the view closed).
    pub fn invalidate(&mut self) {
        self.current = None;
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        self.current == Some(token.0)
    }

    /// Mark `token` finished. Returns whether its result should be applied.
    pub fn finish(&mut self, token: RequestToken) -> bool {
        if self.is_current(token) {
            self.current = None;
            true
        } else {
            false
        }
    }

    /// Whether a load is outstanding.
    pub fn is_pending(&self) -> bool {
        self.current.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newer_request_supersedes() {
        let mut tracker = RequestTracker::new();
        let first = tracker.begin();
        let second = tracker.begin();
        assert!(first < second);
        assert!(!tracker.is_current(first));
        assert!(tracker.finish(second));
        assert!(!tracker.finish(first));
    }

    #[test]
    fn test_invalidate_drops_everything() {
        let mut tracker = RequestTracker::new();
        let token = tracker.begin();
        tracker.invalidate();
        assert!(!tracker.is_pending());
        assert!(!tracker.finish(token));
    }

    #[test]
    fn test_finish_is_single_use() {
        let mut tracker = RequestTracker::new();
        let token = tracker.begin();
        assert!(tracker.finish(token));
        assert!(!tracker.finish(token));
    }
}
