//! Tracker client: drives a [`Session`](crate::session::structs::session::Session)
//! against a real UDP socket and real timers.
//!
//! The client is pull based. Every call to
//! [`next_event`](structs::udp_tracker_client::UdpTrackerClient::next_event)
//! waits on the socket, the retry timer and the interval timer at once, feeds
//! whatever happens first to the session and applies the resulting effects.
//! Nothing is spawned: when the caller stops polling, no timer keeps the
//! runtime busy.
//!
//! # Example
//!
//! ```rust,no_run
//! use torrust_udp_client::client::structs::udp_tracker_client::UdpTrackerClient;
//! use torrust_udp_client::common::structs::tracker_address::TrackerAddress;
//! use torrust_udp_client::config::structs::client_config::ClientConfig;
//! use torrust_udp_client::session::enums::tracker_event::TrackerEvent;
//! use torrust_udp_client::udp::enums::announce_event::AnnounceEvent;
//! use torrust_udp_client::udp::structs::announce_params::AnnounceParams;
//! use torrust_udp_client::udp::structs::info_hash::InfoHash;
//! use torrust_udp_client::udp::structs::peer_id::PeerId;
//!
//! # async fn example() {
//! let tracker = TrackerAddress::parse("udp://tracker.example.org:6969/announce", 80).unwrap();
//! let mut client = UdpTrackerClient::new(PeerId([1; 20]), InfoHash([2; 20]), tracker, ClientConfig::default());
//! client.announce(AnnounceEvent::Started, AnnounceParams::default()).await;
//! while let Some(event) = client.next_event().await {
//!     match event {
//!         TrackerEvent::Update(update) => println!("{} peers", update.peers.len()),
//!         TrackerEvent::Error(error) => eprintln!("{error}"),
//!     }
//! }
//! # }
//! ```

/// Socket helpers.
#[allow(clippy::module_inception)]
pub mod client;

/// Implementation blocks for the client.
pub mod impls;

/// The client itself.
pub mod structs;

/// Callback interface for [`run`](structs::udp_tracker_client::UdpTrackerClient::run).
pub mod traits;
