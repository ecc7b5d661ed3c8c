pub mod action;
pub mod announce_event;
pub mod response_error;
