//! UDP tracker wire codec (BEP 15).
//!
//! This module contains the client side of the UDP tracker protocol as
//! specified in BEP 15: the messages a peer sends to a tracker and the
//! responses it has to validate.
//!
//! # Protocol Overview
//!
//! 1. Client sends a connect request carrying the protocol identifier
//! 2. Tracker responds with a connection ID
//! 3. Client sends an announce request using that connection ID
//! 4. Tracker responds with an interval, swarm counters and a compact peer list
//!
//! # Message Types
//!
//! - **Connect** (action=0): 16 byte request, 16 byte response
//! - **Announce** (action=1): 98 byte request, response of at least 20 bytes
//! - **Error** (action=3): tracker supplied message, more than 8 bytes
//!
//! All integers are big-endian. Every decoder checks the response length and
//! action before it reads anything else, and rejects responses whose
//! transaction ID differs from the one the request was sent with.
//!
//! # Example
//!
//! ```rust
//! use torrust_udp_client::udp::structs::connect_request::ConnectRequest;
//! use torrust_udp_client::udp::structs::transaction_id::TransactionId;
//!
//! let packet = ConnectRequest { transaction_id: TransactionId(42) }.to_bytes();
//! assert_eq!(packet.len(), 16);
//! ```

/// Enumerations for protocol actions, announce events and decode errors.
pub mod enums;

/// Implementation blocks for encoding and decoding messages.
pub mod impls;

/// Data structures for protocol messages and their fields.
pub mod structs;

/// Protocol constants and helpers shared by all messages.
#[allow(clippy::module_inception)]
pub mod udp;
