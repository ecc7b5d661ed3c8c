//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Tracker, torrent and transfer counters to announce.
pub mod announce_config;

/// Options of the tracker client itself.
pub mod client_config;

/// Root configuration structure containing all settings.
pub mod configuration;
