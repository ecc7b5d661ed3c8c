pub mod announce_config;
pub mod client_config;
pub mod configuration;
pub mod configuration_error;
