//! Exponential retransmission scheduling.
//!
//! UDP gives no delivery guarantee, so every request is resent until the
//! tracker answers. The schedule follows BEP 15: after the initial send the
//! client waits `base * 2^n` before resend `n`, for `n = 1..=7`, and gives up
//! after a final wait of `base * 2^8`.
//!
//! The module is split in two:
//!
//! - [`Backoff`](structs::backoff::Backoff) is pure bookkeeping (attempt
//!   counter, next timeout, the payload to resend) and never touches a clock.
//! - [`TimerSlot`](structs::timer_slot::TimerSlot) owns at most one armed
//!   timer. Arming replaces the previous timer and cancelling is idempotent.
//!
//! Timers are plain futures owned by whoever polls them. Nothing is spawned,
//! so an armed slot never keeps the runtime alive on its own.

/// Outcome of an elapsed retry timer.
pub mod enums;

/// Implementation blocks for the backoff state and timer slot.
pub mod impls;

/// Backoff state and timer slot definitions.
pub mod structs;

mod tests;
