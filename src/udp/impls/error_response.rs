use byteorder::{ByteOrder, NetworkEndian};
use crate::udp::enums::response_error::ResponseError;
use crate::udp::structs::error_response::ErrorResponse;
use crate::udp::structs::transaction_id::TransactionId;
use crate::udp::udp::{ACTION_ERROR, ERROR_RESPONSE_MIN_SIZE};

impl ErrorResponse {
    #[tracing::instrument(skip(bytes), level = "debug")]
    pub fn from_bytes(bytes: &[u8], expected: TransactionId) -> Result<Self, ResponseError> {
        if bytes.len() < ERROR_RESPONSE_MIN_SIZE {
            return Err(ResponseError::MalformedResponse("error action response is not 9 bytes long".into()));
        }

        let action = NetworkEndian::read_i32(&bytes[0..4]);
        if action != ACTION_ERROR {
            return Err(ResponseError::MalformedResponse(
                format!("error response carries action {action}").into(),
            ));
        }

        let transaction_id = TransactionId(NetworkEndian::read_i32(&bytes[4..8]));
        if transaction_id != expected {
            return Err(ResponseError::TransactionMismatch { expected, received: transaction_id });
        }

        Ok(ErrorResponse {
            transaction_id,
            message: String::from_utf8_lossy(&bytes[8..]).into_owned().into(),
        })
    }

    /// Tracker side of the exchange, used by test trackers and benches.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = vec![0u8; 8];
        NetworkEndian::write_i32(&mut bytes[0..4], ACTION_ERROR);
        NetworkEndian::write_i32(&mut bytes[4..8], self.transaction_id.0);
        bytes.extend_from_slice(self.message.as_bytes());
        bytes
    }
}
