pub mod random_transaction_ids;
pub mod session;
pub mod session_state;
