use std::time::Duration;

#[derive(PartialEq, Eq, Clone, Debug)]
pub enum BackoffStep<R> {
    /// Resend `payload` now and wait `next_timeout` for an answer.
    Resend { payload: R, next_timeout: Duration },
    /// The attempt ceiling was reached after waiting `timeout`.
    Exhausted { timeout: Duration },
}
