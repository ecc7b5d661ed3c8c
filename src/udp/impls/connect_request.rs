use byteorder::{ByteOrder, NetworkEndian};
use crate::udp::structs::connect_request::ConnectRequest;
use crate::udp::udp::{ACTION_CONNECT, CONNECT_REQUEST_SIZE, PROTOCOL_IDENTIFIER};

impl ConnectRequest {
    /// `protocol identifier(8) | action=0(4) | transaction id(4)`
    #[tracing::instrument(level = "debug")]
    pub fn to_bytes(&self) -> [u8; CONNECT_REQUEST_SIZE] {
        let mut bytes = [0u8; CONNECT_REQUEST_SIZE];
        NetworkEndian::write_i64(&mut bytes[0..8], PROTOCOL_IDENTIFIER);
        NetworkEndian::write_i32(&mut bytes[8..12], ACTION_CONNECT);
        NetworkEndian::write_i32(&mut bytes[12..16], self.transaction_id.0);
        bytes
    }
}
