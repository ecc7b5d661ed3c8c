pub mod backoff_step;
