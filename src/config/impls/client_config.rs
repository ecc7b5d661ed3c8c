use std::time::Duration;
use crate::config::structs::client_config::ClientConfig;

pub const DEFAULT_BASE_TIMEOUT_MS: u64 = 15000;
pub const DEFAULT_TRACKER_PORT: u16 = 80;

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            listen_port: 0,
            base_timeout_ms: DEFAULT_BASE_TIMEOUT_MS,
            default_tracker_port: DEFAULT_TRACKER_PORT,
        }
    }
}

impl ClientConfig {
    pub fn base_timeout(&self) -> Duration {
        Duration::from_millis(self.base_timeout_ms)
    }
}
