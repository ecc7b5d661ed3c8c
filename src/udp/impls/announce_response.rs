use byteorder::{ByteOrder, NetworkEndian};
use crate::udp::enums::response_error::ResponseError;
use crate::udp::structs::announce_interval::AnnounceInterval;
use crate::udp::structs::announce_response::AnnounceResponse;
use crate::udp::structs::number_of_peers::NumberOfPeers;
use crate::udp::structs::transaction_id::TransactionId;
use crate::udp::udp::{ACTION_ANNOUNCE, ANNOUNCE_RESPONSE_MIN_SIZE};

impl AnnounceResponse {
    #[tracing::instrument(skip(bytes), level = "debug")]
    pub fn from_bytes(bytes: &[u8], expected: TransactionId) -> Result<Self, ResponseError> {
        if bytes.len() < ANNOUNCE_RESPONSE_MIN_SIZE {
            return Err(ResponseError::MalformedResponse("announce response should be 20 bytes".into()));
        }

        let action = NetworkEndian::read_i32(&bytes[0..4]);
        if action != ACTION_ANNOUNCE {
            return Err(ResponseError::MalformedResponse(
                format!("announce response carries action {action}").into(),
            ));
        }

        let transaction_id = TransactionId(NetworkEndian::read_i32(&bytes[4..8]));
        if transaction_id != expected {
            return Err(ResponseError::TransactionMismatch { expected, received: transaction_id });
        }

        Ok(AnnounceResponse {
            transaction_id,
            announce_interval: AnnounceInterval(NetworkEndian::read_u32(&bytes[8..12])),
            leechers: NumberOfPeers(NetworkEndian::read_u32(&bytes[12..16])),
            seeders: NumberOfPeers(NetworkEndian::read_u32(&bytes[16..20])),
            peers: bytes[ANNOUNCE_RESPONSE_MIN_SIZE..].to_vec(),
        })
    }

    /// Tracker side of the exchange, used by test trackers and benches.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = vec![0u8; ANNOUNCE_RESPONSE_MIN_SIZE];
        NetworkEndian::write_i32(&mut bytes[0..4], ACTION_ANNOUNCE);
        NetworkEndian::write_i32(&mut bytes[4..8], self.transaction_id.0);
        NetworkEndian::write_u32(&mut bytes[8..12], self.announce_interval.0);
        NetworkEndian::write_u32(&mut bytes[12..16], self.leechers.0);
        NetworkEndian::write_u32(&mut bytes[16..20], self.seeders.0);
        bytes.extend_from_slice(&self.peers);
        bytes
    }
}
