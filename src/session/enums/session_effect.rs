use std::time::Duration;
use crate::session::enums::tracker_event::TrackerEvent;

/// Side effect requested by a session transition, applied in order.
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum SessionEffect {
    /// Open a fresh socket for this cycle, replacing any previous one.
    OpenTransport,
    Send(Vec<u8>),
    CloseTransport,
    ArmRetry(Duration),
    CancelRetry,
    ArmInterval(Duration),
    CancelInterval,
    Emit(TrackerEvent),
}
