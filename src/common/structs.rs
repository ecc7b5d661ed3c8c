/// Plain message error used by the binary.
pub mod custom_error;

/// Tracker host and UDP port taken from an announce URL.
pub mod tracker_address;
