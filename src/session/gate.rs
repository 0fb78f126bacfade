/// True iff the marker identifies an authenticated user
pub fn is_authorized(session: Option<&str>) -> bool {
    session.is_some_and(|s| !s.is_empty())
}

/// Outcome of checking a protected view against the current session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// Session present, the protected content may render
    Granted,
    /// No session. `open_prompt` is set on the first denial of a
    /// navigation so the sign-in prompt opens at most once.
    Denied { open_prompt: bool },
}

/// Decides whether protected content renders.
///
/// Unauthenticated arrivals get the sign-in prompt requested exactly once
/// per navigation; re-checking while the prompt is pending never queues a
/// second one. Purely local, no error states.
#[derive(Debug, Default)]
pub struct SessionGate {
    prompt_requested: bool,
}

impl SessionGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluate the gate for the current session marker
    pub fn check(&mut self, session: Option<&str>) -> GateDecision {
        if is_authorized(session) {
            self.prompt_requested = false;
            return GateDecision::Granted;
        }
        if self.prompt_requested {
            GateDecision::Denied { open_prompt: false }
        } else {
            self.prompt_requested = true;
            GateDecision::Denied { open_prompt: true }
        }
    }

    /// Arm the one-shot again when the user navigates to another view
    pub fn reset(&mut self) {
        self.prompt_requested = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authorized_iff_non_empty() {
        assert!(!is_authorized(None));
        assert!(!is_authorized(Some("")));
        assert!(is_authorized(Some("agent@nyumba.co.ke")));
    }

    #[test]
    fn test_prompt_opens_once_per_navigation() {
        let mut gate = SessionGate::new();
        assert_eq!(gate.check(None), GateDecision::Denied { open_prompt: true });
        assert_eq!(gate.check(None), GateDecision::Denied { open_prompt: false });
        assert_eq!(gate.check(None), GateDecision::Denied { open_prompt: false });
    }

    #[test]
    fn test_reset_rearms_the_prompt() {
        let mut gate = SessionGate::new();
        gate.check(None);
        gate.reset();
        assert_eq!(gate.check(None), GateDecision::Denied { open_prompt: true });
    }

    #[test]
    fn test_login_while_prompt_pending_grants_without_second_prompt() {
        let mut gate = SessionGate::new();
        assert_eq!(gate.check(None), GateDecision::Denied { open_prompt: true });
        // user signed in through the pending prompt
        assert_eq!(gate.check(Some("agent@nyumba.co.ke")), GateDecision::Granted);
        // session dropped again on the same view: the shot is re-armed
        assert_eq!(gate.check(None), GateDecision::Denied { open_prompt: true });
    }

    #[test]
    fn test_empty_identifier_is_denied() {
        let mut gate = SessionGate::new();
        assert_eq!(gate.check(Some("")), GateDecision::Denied { open_prompt: true });
    }
}
