use std::time::Duration;
use crate::backoff::structs::timer_slot::TimerSlot;

impl TimerSlot {
    pub fn new() -> TimerSlot {
        TimerSlot { sleep: None }
    }

    /// Replaces whatever was armed before. Must be called inside a tokio runtime.
    pub fn arm(&mut self, duration: Duration) {
        self.sleep = Some(Box::pin(tokio::time::sleep(duration)));
    }

    pub fn cancel(&mut self) {
        self.sleep = None;
    }

    pub fn is_armed(&self) -> bool {
        self.sleep.is_some()
    }

    /// Resolves once the armed timer fires and disarms the slot.
    ///
    /// Pends forever on an empty slot. Dropping the future before it resolves
    /// leaves the timer armed, so this is safe to use as a `select!` branch.
    pub async fn elapsed(&mut self) {
        match self.sleep.as_mut() {
            Some(sleep) => sleep.await,
            None => std::future::pending::<()>().await,
        }
        self.sleep = None;
    }
}
