use byteorder::{ByteOrder, NetworkEndian};

/// Magic connection ID every connect request starts with (`0x41727101980`).
pub const PROTOCOL_IDENTIFIER: i64 = 4_497_486_125_440;

pub const ACTION_CONNECT: i32 = 0;
pub const ACTION_ANNOUNCE: i32 = 1;
pub const ACTION_ERROR: i32 = 3;

pub const CONNECT_REQUEST_SIZE: usize = 16;
pub const CONNECT_RESPONSE_SIZE: usize = 16;
pub const ANNOUNCE_REQUEST_SIZE: usize = 98;
pub const ANNOUNCE_RESPONSE_MIN_SIZE: usize = 20;
pub const ERROR_RESPONSE_MIN_SIZE: usize = 9;

/// Size of one IPv4 entry in a compact peer list.
pub const COMPACT_PEER_SIZE: usize = 6;

/// Key sent with every announce. Fixed, not a per-session random key.
pub const ANNOUNCE_KEY: u32 = 0;
pub const NUM_WANT: u32 = 50;

/// Largest UDP payload over IPv4.
pub const MAX_PACKET_SIZE: usize = 65_507;

/// Reads the action field of a response without validating anything else.
///
/// Returns `None` when the datagram is too short to carry an action.
#[inline]
pub fn peek_action(bytes: &[u8]) -> Option<i32> {
    if bytes.len() < 4 {
        return None;
    }
    Some(NetworkEndian::read_i32(&bytes[0..4]))
}
