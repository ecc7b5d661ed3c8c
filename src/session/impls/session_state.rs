use std::fmt;
use std::fmt::Formatter;
use crate::session::enums::phase::Phase;
use crate::session::enums::session_state::SessionState;

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let name = match self {
            SessionState::Idle => "idle",
            SessionState::AwaitingConnect => "awaiting connect",
            SessionState::AwaitingAnnounce => "awaiting announce",
            SessionState::Waiting => "waiting",
            SessionState::Destroyed => "destroyed",
        };
        write!(f, "{name}")
    }
}

impl Phase {
    pub(crate) fn state(&self) -> SessionState {
        match self {
            Phase::Idle => SessionState::Idle,
            Phase::AwaitingConnect { .. } => SessionState::AwaitingConnect,
            Phase::AwaitingAnnounce { .. } => SessionState::AwaitingAnnounce,
            Phase::Waiting => SessionState::Waiting,
            Phase::Destroyed => SessionState::Destroyed,
        }
    }
}
