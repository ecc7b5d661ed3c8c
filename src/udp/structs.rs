//! Data structures for UDP tracker messages.
//!
//! Field newtypes mirror the wire widths; message structs carry exactly the
//! fields a client writes or reads.

/// Announce interval in seconds as returned by the tracker.
pub mod announce_interval;

/// Transfer counters and event supplied with each announce.
pub mod announce_params;

/// Announce request (98 bytes on the wire).
pub mod announce_request;

/// Announce response (20 bytes plus compact peers).
pub mod announce_response;

/// Connect request (16 bytes on the wire).
pub mod connect_request;

/// Connect response (16 bytes on the wire).
pub mod connect_response;

/// 8-byte connection token issued by the tracker.
pub mod connection_id;

/// Tracker error response (action 3).
pub mod error_response;

/// 20-byte torrent identifier.
pub mod info_hash;

/// 64-bit byte counter.
pub mod number_of_bytes;

/// Peer counters and the number of peers wanted.
pub mod number_of_peers;

/// Key field of an announce request.
pub mod peer_key;

/// 20-byte self identifier.
pub mod peer_id;

/// Port this client listens on.
pub mod port;

/// 4-byte request correlation token.
pub mod transaction_id;
