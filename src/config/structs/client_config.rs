use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct ClientConfig {
    /// Port reported to the tracker as the one this peer listens on.
    pub listen_port: u16,
    /// Backoff base; the first retry waits twice this long.
    pub base_timeout_ms: u64,
    /// Used when the announce URL carries no port.
    pub default_tracker_port: u16,
}
