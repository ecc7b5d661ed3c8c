//! # Torrust UDP Tracker Client
//!
//! An announce client for the BitTorrent UDP tracker protocol (BEP 15).
//!
//! ## Overview
//!
//! The client contacts a tracker over UDP with a connect request, announces a
//! torrent with the connection ID it gets back, and reports the swarm size and
//! compact peer list of the answer. It then re-announces on the interval the
//! tracker asks for until it is destroyed.
//!
//! UDP is unreliable, so every request is resent with an exponentially growing
//! timeout, and every response is checked against the transaction ID of the
//! request it claims to answer before anything else happens.
//!
//! ## Features
//!
//! - **Pure state machine**: the handshake is a [`session::structs::session::Session`]
//!   returning effects, testable without sockets or clocks
//! - **Backoff**: 7 resends at `base * 2^n` before giving up
//! - **Single control flow**: no spawned tasks; timers are owned futures
//! - **Configuration**: TOML file with validated defaults
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use torrust_udp_client::client::structs::udp_tracker_client::UdpTrackerClient;
//! use torrust_udp_client::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_from_file("config.toml", false)?;
//! let tracker = config.announce.tracker_address(config.client.default_tracker_port)?;
//! let mut client = UdpTrackerClient::new(config.announce.peer_id()?, config.announce.info_hash()?, tracker, config.client);
//! client.announce(config.announce.event, config.announce.params()).await;
//! ```
//!
//! ## Modules
//!
//! - [`udp`] - Wire codec for connect, announce and error messages
//! - [`backoff`] - Exponential retry state and owned timer slots
//! - [`session`] - Connect-then-announce state machine
//! - [`client`] - Socket and timer driver around a session
//! - [`common`] - Compact peer lists, tracker addresses, shared errors
//! - [`config`] - Configuration management and TOML parsing
//! - [`logging`] - Logger setup
//! - [`structs`] - CLI argument parsing

/// UDP tracker wire codec (BEP 15).
///
/// Encodes connect and announce requests and validates connect, announce and
/// error responses, including their transaction IDs.
pub mod udp;

/// Exponential backoff for request retransmission.
pub mod backoff;

/// Handshake state machine.
///
/// Turns inputs (start, datagram, retry timeout, destroy) into effects the
/// caller carries out.
pub mod session;

/// Tracker client driving a session over a real socket.
pub mod client;

/// Common utilities and shared functionality.
///
/// Contains compact peer list expansion, announce URL parsing and the error
/// type used by the binary.
pub mod common;

/// Configuration management module.
///
/// Handles loading, parsing and validating configuration from TOML files.
pub mod config;

/// Logging setup with `fern`.
pub mod logging;

/// CLI argument parsing.
pub mod structs;
