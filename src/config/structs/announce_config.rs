use serde::{Deserialize, Serialize};
use crate::udp::enums::announce_event::AnnounceEvent;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AnnounceConfig {
    pub tracker: String,
    /// 40 hex characters.
    pub info_hash: String,
    /// 20 characters, or 40 hex characters.
    pub peer_id: String,
    #[serde(default)]
    pub event: AnnounceEvent,
    #[serde(default)]
    pub downloaded: u64,
    #[serde(default)]
    pub left: u64,
    #[serde(default)]
    pub uploaded: u64,
}
