pub mod action;
pub mod announce_event;
pub mod announce_request;
pub mod announce_response;
pub mod connect_request;
pub mod connect_response;
pub mod error_response;
pub mod info_hash;
pub mod peer_id;
pub mod transaction_id;
