use std::collections::VecDeque;
use std::net::SocketAddr;
use tokio::net::UdpSocket;
use crate::backoff::structs::timer_slot::TimerSlot;
use crate::common::structs::tracker_address::TrackerAddress;
use crate::session::enums::tracker_event::TrackerEvent;
use crate::session::structs::session::Session;
use crate::udp::enums::announce_event::AnnounceEvent;
use crate::udp::structs::announce_params::AnnounceParams;

/// Announces one torrent to one UDP tracker, re-announcing on the interval
/// the tracker asks for until [`destroy`](Self::destroy) is called.
pub struct UdpTrackerClient {
    pub(crate) session: Session,
    pub(crate) tracker: TrackerAddress,
    /// Last successful resolution of `tracker`.
    pub(crate) resolved: Option<SocketAddr>,
    /// Open only while a handshake cycle is in flight.
    pub(crate) socket: Option<UdpSocket>,
    pub(crate) retry_timer: TimerSlot,
    pub(crate) interval_timer: TimerSlot,
    pub(crate) events: VecDeque<TrackerEvent>,
    pub(crate) last_announce: Option<(AnnounceEvent, AnnounceParams)>,
}
