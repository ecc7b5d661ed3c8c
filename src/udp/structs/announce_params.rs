/// Transfer state reported to the tracker with every announce.
///
/// Counters the caller does not know are reported as zero. The event is
/// passed next to the params (see [`AnnounceEvent`]) so a re-announce can
/// repeat both.
///
/// [`AnnounceEvent`]: crate::udp::enums::announce_event::AnnounceEvent
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default)]
pub struct AnnounceParams {
    pub downloaded: u64,
    pub left: u64,
    pub uploaded: u64,
}
