use crate::backoff::structs::backoff::Backoff;
use crate::udp::enums::announce_event::AnnounceEvent;
use crate::udp::structs::announce_params::AnnounceParams;
use crate::udp::structs::transaction_id::TransactionId;

/// Session state together with the data that only exists in that state.
#[derive(Debug)]
pub(crate) enum Phase {
    Idle,
    AwaitingConnect {
        transaction_id: TransactionId,
        backoff: Backoff<Vec<u8>>,
        event: AnnounceEvent,
        params: AnnounceParams,
    },
    AwaitingAnnounce {
        transaction_id: TransactionId,
        backoff: Backoff<Vec<u8>>,
    },
    Waiting,
    Destroyed,
}
