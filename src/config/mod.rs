//! Configuration management module.
//!
//! This module handles loading, parsing and validating the client
//! configuration from a TOML file.
//!
//! # Configuration Structure
//!
//! The configuration file (`config.toml`) contains:
//! - **log_level**: `off`, `trace`, `debug`, `info`, `warn` or `error`
//! - **client**: socket and retry settings handed to the tracker client
//! - **announce**: the tracker, torrent and transfer state to announce
//!
//! Missing `[client]` keys fall back to their defaults.
//!
//! # Example
//!
//! ```rust
//! use torrust_udp_client::config::structs::configuration::Configuration;
//!
//! let config = Configuration::init();
//! assert_eq!(config.client.base_timeout_ms, 15000);
//! assert!(config.validate().is_ok());
//! ```

/// Configuration errors.
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;
