pub mod announce_error;
pub mod phase;
pub mod session_effect;
pub mod session_input;
pub mod session_state;
pub mod tracker_event;
