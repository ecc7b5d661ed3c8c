use std::time::Duration;
use crate::backoff::enums::backoff_step::BackoffStep;
use crate::backoff::structs::backoff::Backoff;

pub const MAX_ATTEMPTS: u32 = 8;

impl<R: Clone> Backoff<R> {
    /// Starts at attempt 1: the initial send has already happened and the
    /// first timer waits `base * 2`.
    pub fn new(resend: R, base_timeout: Duration) -> Backoff<R> {
        Backoff {
            resend,
            attempt: 1,
            base_timeout,
            max_attempts: MAX_ATTEMPTS,
        }
    }

    /// `base * 2^attempt`, saturating instead of overflowing.
    pub fn timeout_for(base_timeout: Duration, attempt: u32) -> Duration {
        let factor = 1u32.checked_shl(attempt).unwrap_or(u32::MAX);
        base_timeout.saturating_mul(factor)
    }

    pub fn attempt(&self) -> u32 {
        self.attempt
    }

    pub fn current_timeout(&self) -> Duration {
        Self::timeout_for(self.base_timeout, self.attempt)
    }

    /// Called when the timer armed with [`current_timeout`](Self::current_timeout) fires.
    pub fn on_elapsed(&mut self) -> BackoffStep<R> {
        if self.attempt >= self.max_attempts {
            return BackoffStep::Exhausted { timeout: self.current_timeout() };
        }
        self.attempt += 1;
        BackoffStep::Resend {
            payload: self.resend.clone(),
            next_timeout: self.current_timeout(),
        }
    }
}
