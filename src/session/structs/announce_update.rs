/// Payload of a successful announce.
#[derive(PartialEq, Eq, Clone, Debug, Default)]
pub struct AnnounceUpdate {
    /// Seconds until the next automatic announce.
    pub interval: u32,
    pub leechers: u32,
    pub seeds: u32,
    /// Peers as `"a.b.c.d:port"`, in the order the tracker sent them.
    pub peers: Vec<String>,
}
