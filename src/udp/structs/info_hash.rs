//! BitTorrent info hash identifier.

/// A 20-byte BitTorrent info hash.
///
/// The info hash is the SHA-1 hash of the "info" dictionary in a torrent file.
/// It identifies the torrent this client announces for and never changes for
/// the lifetime of a client.
///
/// # Example
///
/// ```rust
/// use torrust_udp_client::udp::structs::info_hash::InfoHash;
///
/// let hash: InfoHash = "0123456789abcdef0123456789abcdef01234567".parse().unwrap();
/// assert_eq!(hash.0[0], 0x01);
/// ```
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct InfoHash(pub [u8; 20]);
