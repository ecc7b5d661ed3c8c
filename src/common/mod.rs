//! Shared helpers and the default collaborators of the announce engine.
//!
//! # Utilities
//!
//! - Compact peer list expansion (`"a.b.c.d:port"` strings)
//! - Announce URL authority parsing and IPv4 resolution
//!
//! # Data Structures
//!
//! - `CustomError` - Binary level error with a plain message
//! - `TrackerAddress` - Host and UDP port of a tracker
//!
//! # Example
//!
//! ```rust
//! use torrust_udp_client::common::common::compact_peers_to_strings;
//! use torrust_udp_client::common::structs::tracker_address::TrackerAddress;
//!
//! let peers = compact_peers_to_strings(&[127, 0, 0, 1, 0x1A, 0xE1]);
//! assert_eq!(peers, vec!["127.0.0.1:6881".to_string()]);
//!
//! let tracker = TrackerAddress::parse("udp://tracker.example.org:6969/announce", 80).unwrap();
//! assert_eq!(tracker.port, 6969);
//! ```

/// Address parsing errors.
pub mod enums;

/// Common data structures (errors, tracker address).
pub mod structs;

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;

/// Implementation blocks for common types.
pub mod impls;
