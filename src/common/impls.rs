pub mod custom_error;
pub mod tracker_address;
