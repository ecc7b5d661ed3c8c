pub mod announce_update;
pub mod random_transaction_ids;
pub mod session;
