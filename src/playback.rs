//! Playback coordination: which single clip is allowed to play.
//!
//! The coordinator holds the "active id" plus the token of the request that
//! made it active. The audio worker follows it: every `play` replaces
//! whatever was sounding before, and reports carry the token back so a late
//! report from an older request can be told apart from the current one,
//! even for the same clip.

/// Identifies one `play` request.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct PlayToken(u64);

#[derive(Debug, Default)]
pub struct PlaybackCoordinator {
    active: Option<(String, PlayToken)>,
    next_token: u64,
}

impl PlaybackCoordinator {
    /// Make `id` the active clip under a fresh token.
    pub fn play(&mut self, id: impl Into<String>) -> PlayToken {
        let token = PlayToken(self.next_token);
        self.next_token += 1;
        self.active = Some((id.into(), token));
        token
    }

    /// Clear the active clip. Returns the id that was active, if any.
    pub fn stop(&mut self) -> Option<String> {
        self.active.take().map(|(id, _)| id)
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active.as_ref().map(|(id, _)| id.as_str())
    }

    /// Derived per-card flag: is `id` the one allowed to play.
    pub fn is_active(&self, id: &str) -> bool {
        self.active_id() == Some(id)
    }

    /// Clear the active clip only if it was started by `token`.
    ///
    /// Used when a clip fails or finishes. Returns the cleared id.
    pub fn clear_if_current(&mut self, token: PlayToken) -> Option<String> {
        match &self.active {
            Some((_, current)) if *current == token => self.stop(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn play_replaces_previous_clip() {
        let mut p = PlaybackCoordinator::default();
        p.play("a");
        p.play("b");
        assert_eq!(p.active_id(), Some("b"));
        assert!(p.is_active("b"));
        assert!(!p.is_active("a"));

        let ids = ["a", "b", "c"];
        assert_eq!(ids.iter().filter(|id| p.is_active(id)).count(), 1);
    }

    #[test]
    fn every_request_gets_a_fresh_token() {
        let mut p = PlaybackCoordinator::default();
        let first = p.play("a");
        let second = p.play("a");
        assert_ne!(first, second);
        assert_eq!(p.active_id(), Some("a"));
    }

    #[test]
    fn stop_clears_active_clip() {
        let mut p = PlaybackCoordinator::default();
        assert_eq!(p.stop(), None);
        p.play("a");
        assert_eq!(p.stop(), Some("a".to_string()));
        assert_eq!(p.active_id(), None);
        assert!(!p.is_active("a"));
    }

    #[test]
    fn stale_report_does_not_clear_newer_clip() {
        let mut p = PlaybackCoordinator::default();
        let a = p.play("a");
        let b = p.play("b");
        assert_eq!(p.clear_if_current(a), None);
        assert_eq!(p.active_id(), Some("b"));
        assert_eq!(p.clear_if_current(b), Some("b".to_string()));
        assert_eq!(p.active_id(), None);
    }

    #[test]
    fn stale_report_does_not_clear_replay_of_same_clip() {
        let mut p = PlaybackCoordinator::default();
        let first = p.play("a");
        p.stop();
        let second = p.play("a");

        assert_eq!(p.clear_if_current(first), None);
        assert!(p.is_active("a"));
        assert_eq!(p.clear_if_current(second), Some("a".to_string()));
    }
}
