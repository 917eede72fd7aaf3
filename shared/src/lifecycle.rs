/// Two-phase page initialization.
///
/// The first render happens before the browser environment is usable, so
/// the page stays a placeholder until it is told the environment is ready.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MountPhase {
    #[default]
    Placeholder,
    Interactive,
}

impl MountPhase {
    pub fn is_interactive(&self) -> bool {
        matches!(self, MountPhase::Interactive)
    }

    /// Advance to `Interactive`. Returns true only for the call that
    /// actually performed the transition.
    pub fn mark_ready(&mut self) -> bool {
        match self {
            MountPhase::Placeholder => {
                *self = MountPhase::Interactive;
                true
            }
            MountPhase::Interactive => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_as_placeholder() {
        let phase = MountPhase::default();
        assert_eq!(phase, MountPhase::Placeholder);
        assert!(!phase.is_interactive());
    }

    #[test]
    fn test_transitions_exactly_once() {
        let mut phase = MountPhase::default();
        assert!(phase.mark_ready());
        assert!(phase.is_interactive());

        // Never goes back, never transitions again
        assert!(!phase.mark_ready());
        assert_eq!(phase, MountPhase::Interactive);
    }
}
