use std::pin::Pin;
use tokio::time::Sleep;

/// Holds at most one armed timer.
#[derive(Debug, Default)]
pub struct TimerSlot {
    pub(crate) sleep: Option<Pin<Box<Sleep>>>,
}
