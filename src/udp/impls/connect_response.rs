use byteorder::{ByteOrder, NetworkEndian};
use crate::udp::enums::response_error::ResponseError;
use crate::udp::structs::connect_response::ConnectResponse;
use crate::udp::structs::connection_id::ConnectionId;
use crate::udp::structs::transaction_id::TransactionId;
use crate::udp::udp::{ACTION_CONNECT, CONNECT_RESPONSE_SIZE};

impl ConnectResponse {
    #[tracing::instrument(skip(bytes), level = "debug")]
    pub fn from_bytes(bytes: &[u8], expected: TransactionId) -> Result<Self, ResponseError> {
        if bytes.len() != CONNECT_RESPONSE_SIZE {
            return Err(ResponseError::MalformedResponse("connect response is not 16 bytes long".into()));
        }

        let action = NetworkEndian::read_i32(&bytes[0..4]);
        if action != ACTION_CONNECT {
            return Err(ResponseError::MalformedResponse(
                format!("connect response carries action {action}").into(),
            ));
        }

        let transaction_id = TransactionId(NetworkEndian::read_i32(&bytes[4..8]));
        if transaction_id != expected {
            return Err(ResponseError::TransactionMismatch { expected, received: transaction_id });
        }

        Ok(ConnectResponse {
            connection_id: ConnectionId(NetworkEndian::read_i64(&bytes[8..16])),
            transaction_id,
        })
    }

    /// Tracker side of the exchange, used by test trackers and benches.
    pub fn to_bytes(&self) -> [u8; CONNECT_RESPONSE_SIZE] {
        let mut bytes = [0u8; CONNECT_RESPONSE_SIZE];
        NetworkEndian::write_i32(&mut bytes[0..4], ACTION_CONNECT);
        NetworkEndian::write_i32(&mut bytes[4..8], self.transaction_id.0);
        NetworkEndian::write_i64(&mut bytes[8..16], self.connection_id.0);
        bytes
    }
}
