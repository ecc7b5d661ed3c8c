use std::time::Duration;

/// Retry bookkeeping for one request phase.
///
/// `resend` is what gets handed back on every retry; for the tracker session
/// it is the encoded request datagram. The state lives only as long as the
/// phase it belongs to.
#[derive(Clone, Debug)]
pub struct Backoff<R> {
    pub(crate) resend: R,
    pub(crate) attempt: u32,
    pub(crate) base_timeout: Duration,
    pub(crate) max_attempts: u32,
}
