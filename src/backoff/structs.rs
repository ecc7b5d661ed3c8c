pub mod backoff;
pub mod timer_slot;
