use std::borrow::Cow;
use thiserror::Error;
use crate::udp::structs::transaction_id::TransactionId;

/// Reasons a tracker response is rejected by the codec.
///
/// None of these are retried: the phase that received the datagram aborts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResponseError {
    #[error("{0}")]
    MalformedResponse(Cow<'static, str>),

    #[error("transaction id {received} does not match the request's {expected}")]
    TransactionMismatch {
        expected: TransactionId,
        received: TransactionId,
    },

    #[error("unsupported action: {0}")]
    UnsupportedAction(i32),
}
