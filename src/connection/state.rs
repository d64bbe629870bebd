//! Connection ready state

use crate::{Error, Result};

/// Ready state of a managed connection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadyState {
    /// No live connection
    #[default]
    Disconnected,

    /// Connect attempt in flight
    Connecting,

    /// Client built and deployment answered a ping
    Connected,

    /// Shutdown in progress
    Disconnecting,
}

impl ReadyState {
    /// Check if transition is valid
    pub fn can_transition_to(&self, next: ReadyState) -> bool {
        use ReadyState::*;

        matches!(
            (self, next),
            (Disconnected, Connecting)
                | (Connecting, Connected)
                | (Connecting, Disconnected)
                | (Connected, Disconnecting)
                | (Disconnecting, Disconnected)
        )
    }

    /// Transition to new state
    pub fn transition(&mut self, next: ReadyState) -> Result<()> {
        if !self.can_transition_to(next) {
            return Err(Error::invalid_transition(*self, next));
        }
        *self = next;
        Ok(())
    }

    /// True only for `Connected`
    pub fn is_connected(&self) -> bool {
        matches!(self, ReadyState::Connected)
    }
}

impl std::fmt::Display for ReadyState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Disconnected => write!(f, "disconnected"),
            Self::Connecting => write!(f, "connecting"),
            Self::Connected => write!(f, "connected"),
            Self::Disconnecting => write!(f, "disconnecting"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_lifecycle() {
        let mut state = ReadyState::default();
        assert_eq!(state, ReadyState::Disconnected);
        assert!(state.transition(ReadyState::Connecting).is_ok());
        assert!(state.transition(ReadyState::Connected).is_ok());
        assert!(state.is_connected());
        assert!(state.transition(ReadyState::Disconnecting).is_ok());
        assert!(state.transition(ReadyState::Disconnected).is_ok());
    }

    #[test]
    fn test_failed_attempt_returns_to_disconnected() {
        let mut state = ReadyState::Connecting;
        assert!(state.transition(ReadyState::Disconnected).is_ok());
        assert!(!state.is_connected());
    }

    #[test]
    fn test_cannot_skip_connecting() {
        let mut state = ReadyState::Disconnected;
        assert!(state.transition(ReadyState::Connected).is_err());
        // state is unchanged after a rejected transition
        assert_eq!(state, ReadyState::Disconnected);
    }

    #[test]
    fn test_no_second_attempt_while_connected() {
        let mut state = ReadyState::Connected;
        assert!(state.transition(ReadyState::Connecting).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(ReadyState::Connecting.to_string(), "connecting");
        assert_eq!(ReadyState::Disconnecting.to_string(), "disconnecting");
    }
}
