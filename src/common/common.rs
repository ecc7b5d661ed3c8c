use std::net::{Ipv4Addr, SocketAddrV4};
use byteorder::{ByteOrder, NetworkEndian};
use crate::udp::udp::COMPACT_PEER_SIZE;

/// Expands a compact IPv4 peer list into `"a.b.c.d:port"` strings.
///
/// Entries keep the order the tracker sent them in. A trailing partial entry
/// is dropped.
pub fn compact_peers_to_strings(peers: &[u8]) -> Vec<String> {
    peers.chunks_exact(COMPACT_PEER_SIZE)
        .map(|chunk| {
            let ip = Ipv4Addr::new(chunk[0], chunk[1], chunk[2], chunk[3]);
            let port = NetworkEndian::read_u16(&chunk[4..6]);
            SocketAddrV4::new(ip, port).to_string()
        })
        .collect()
}
