//! Generation lifecycle.

/// Phase of the document generation exchange.
///
/// `Pending` is the only phase that blocks a new submission. `Ready` and
/// `Failed` both accept the next request: failure keeps whatever the editor
/// already held, success leaves the generated document in place until the
/// next run replaces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GenerationPhase {
    /// Nothing requested yet, or the screen was reset.
    #[default]
    Idle,
    /// The one allowed request is on the wire.
    Pending,
    /// The last request succeeded and its content is in the editor.
    Ready,
    /// The last request failed; the editor was left untouched.
    Failed,
}

impl GenerationPhase {
    pub fn is_pending(self) -> bool {
        matches!(self, Self::Pending)
    }

    /// A new request may start in every phase except `Pending`.
    pub fn can_submit(self) -> bool {
        !self.is_pending()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_pending_blocks_submission() {
        assert!(GenerationPhase::Idle.can_submit());
        assert!(!GenerationPhase::Pending.can_submit());
        assert!(GenerationPhase::Ready.can_submit());
        assert!(GenerationPhase::Failed.can_submit());
    }

    #[test]
    fn test_is_pending() {
        assert!(GenerationPhase::Pending.is_pending());
        assert!(!GenerationPhase::Idle.is_pending());
        assert!(!GenerationPhase::Ready.is_pending());
        assert!(!GenerationPhase::Failed.is_pending());
    }

    #[test]
    fn test_default_phase_is_idle() {
        assert_eq!(GenerationPhase::default(), GenerationPhase::Idle);
    }
}
