/// Connection token authorising announce requests.
///
/// Before a handshake the magic protocol identifier stands in for it; a
/// connect response replaces it for the rest of that cycle only.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct ConnectionId(pub i64);
