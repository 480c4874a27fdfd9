/// Lifecycle state of a capture session.
///
/// `Unsupported` is terminal: it is entered once at construction when the
/// capability probe fails and is never left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    Listening,
    Unsupported,
}

impl SessionState {
    pub fn label(self) -> &'static str {
        match self {
            SessionState::Idle => "Ready",
            SessionState::Listening => "Listening",
            SessionState::Unsupported => "Not supported",
        }
    }

    pub fn is_listening(self) -> bool {
        self == SessionState::Listening
    }
}

/// Applies lifecycle events to the session state.
///
/// Commands never change the state directly; the transition happens when
/// the corresponding lifecycle event is observed, matching the capability's
/// asynchronous delivery. Transitions out of `Unsupported` are refused.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionStateMachine {
    state: SessionState,
}

impl SessionStateMachine {
    pub fn new(state: SessionState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The capability reported it started listening. Returns true when this
    /// actually changed the state.
    pub fn on_started(&mut self) -> bool {
        match self.state {
            SessionState::Idle => {
                self.state = SessionState::Listening;
                true
            }
            SessionState::Listening | SessionState::Unsupported => false,
        }
    }

    /// The capability stopped — on request, on its own, or after an error.
    /// Returns true when this actually changed the state.
    pub fn on_stopped(&mut self) -> bool {
        match self.state {
            SessionState::Listening => {
                self.state = SessionState::Idle;
                true
            }
            SessionState::Idle | SessionState::Unsupported => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle() {
        assert_eq!(SessionStateMachine::default().state(), SessionState::Idle);
    }

    #[test]
    fn started_moves_idle_to_listening() {
        let mut machine = SessionStateMachine::default();
        assert!(machine.on_started());
        assert_eq!(machine.state(), SessionState::Listening);
    }

    #[test]
    fn duplicate_started_is_ignored() {
        let mut machine = SessionStateMachine::default();
        machine.on_started();
        assert!(!machine.on_started());
        assert_eq!(machine.state(), SessionState::Listening);
    }

    #[test]
    fn stopped_returns_to_idle() {
        let mut machine = SessionStateMachine::default();
        machine.on_started();
        assert!(machine.on_stopped());
        assert_eq!(machine.state(), SessionState::Idle);
    }

    #[test]
    fn stopped_while_idle_is_ignored() {
        let mut machine = SessionStateMachine::default();
        assert!(!machine.on_stopped());
        assert_eq!(machine.state(), SessionState::Idle);
    }

    #[test]
    fn unsupported_is_terminal() {
        let mut machine = SessionStateMachine::new(SessionState::Unsupported);
        assert!(!machine.on_started());
        assert!(!machine.on_stopped());
        assert_eq!(machine.state(), SessionState::Unsupported);
    }
}
