use byteorder::{ByteOrder, NetworkEndian};
use crate::udp::structs::announce_request::AnnounceRequest;
use crate::udp::udp::{ACTION_ANNOUNCE, ANNOUNCE_REQUEST_SIZE};

impl AnnounceRequest {
    #[tracing::instrument(level = "debug")]
    pub fn to_bytes(&self) -> [u8; ANNOUNCE_REQUEST_SIZE] {
        let mut bytes = [0u8; ANNOUNCE_REQUEST_SIZE];
        NetworkEndian::write_i64(&mut bytes[0..8], self.connection_id.0);
        NetworkEndian::write_i32(&mut bytes[8..12], ACTION_ANNOUNCE);
        NetworkEndian::write_i32(&mut bytes[12..16], self.transaction_id.0);

        bytes[16..36].copy_from_slice(&self.info_hash.0);
        bytes[36..56].copy_from_slice(&self.peer_id.0);

        NetworkEndian::write_u64(&mut bytes[56..64], self.bytes_downloaded.0);
        NetworkEndian::write_u64(&mut bytes[64..72], self.bytes_left.0);
        NetworkEndian::write_u64(&mut bytes[72..80], self.bytes_uploaded.0);

        NetworkEndian::write_i32(&mut bytes[80..84], self.event.to_i32());

        // bytes[84..88]: IP address, always 0 (tracker uses the sender address)

        NetworkEndian::write_u32(&mut bytes[88..92], self.key.0);
        NetworkEndian::write_u32(&mut bytes[92..96], self.peers_wanted.0);
        NetworkEndian::write_u16(&mut bytes[96..98], self.port.0);
        bytes
    }
}
