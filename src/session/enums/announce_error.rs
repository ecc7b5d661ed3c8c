use thiserror::Error;
use crate::udp::enums::response_error::ResponseError;

/// Everything reported through the `error` event channel.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnnounceError {
    #[error(transparent)]
    Response(#[from] ResponseError),

    /// Message sent by the tracker in an error response, verbatim.
    #[error("{0}")]
    Tracker(String),

    /// Milliseconds waited after the last resend.
    #[error("tracker is not responding after: {0}")]
    RetryExhausted(u64),

    #[error("not calling announce")]
    AnnounceInFlight,

    #[error("unknown event: {0}")]
    UnknownEvent(i32),

    #[error("could not resolve tracker {0}")]
    Unresolvable(String),
}
