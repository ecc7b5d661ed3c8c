use crate::common::enums::address_error::AddressError;
use crate::common::structs::tracker_address::TrackerAddress;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::announce_config::AnnounceConfig;
use crate::udp::structs::announce_params::AnnounceParams;
use crate::udp::structs::info_hash::InfoHash;
use crate::udp::structs::peer_id::PeerId;

impl AnnounceConfig {
    pub fn params(&self) -> AnnounceParams {
        AnnounceParams {
            downloaded: self.downloaded,
            left: self.left,
            uploaded: self.uploaded,
        }
    }

    pub fn info_hash(&self) -> Result<InfoHash, ConfigurationError> {
        self.info_hash.parse::<InfoHash>()
            .map_err(|e| ConfigurationError::ValidationError(format!("info_hash \"{}\": {e}", self.info_hash)))
    }

    pub fn peer_id(&self) -> Result<PeerId, ConfigurationError> {
        self.peer_id.parse::<PeerId>()
            .map_err(|e| ConfigurationError::ValidationError(format!("peer_id \"{}\": {e}", self.peer_id)))
    }

    pub fn tracker_address(&self, default_port: u16) -> Result<TrackerAddress, AddressError> {
        TrackerAddress::parse(&self.tracker, default_port)
    }
}
