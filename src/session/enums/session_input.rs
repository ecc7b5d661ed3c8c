use crate::udp::enums::announce_event::AnnounceEvent;
use crate::udp::structs::announce_params::AnnounceParams;

#[derive(PartialEq, Eq, Clone, Debug)]
pub enum SessionInput {
    Start {
        event: AnnounceEvent,
        params: AnnounceParams,
    },
    Datagram(Vec<u8>),
    RetryElapsed,
    Destroy,
}
