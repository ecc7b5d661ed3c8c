/// Announce authority of a UDP tracker.
///
/// The host is kept unresolved; resolution happens each time a handshake
/// cycle starts so DNS changes are picked up between announces.
#[derive(PartialEq, Eq, Hash, Clone, Debug)]
pub struct TrackerAddress {
    pub host: String,
    pub port: u16,
}
