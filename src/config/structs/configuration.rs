use serde::{Deserialize, Serialize};
use crate::config::structs::announce_config::AnnounceConfig;
use crate::config::structs::client_config::ClientConfig;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    pub log_level: String,
    #[serde(default)]
    pub client: ClientConfig,
    pub announce: AnnounceConfig,
}
