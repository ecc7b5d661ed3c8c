use std::time::Duration;
use crate::session::enums::phase::Phase;
use crate::session::traits::TransactionIdSource;
use crate::udp::structs::connection_id::ConnectionId;
use crate::udp::structs::info_hash::InfoHash;
use crate::udp::structs::peer_id::PeerId;
use crate::udp::structs::port::Port;

/// One tracker handshake cycle at a time, as a pure state machine.
///
/// Fields set at construction (info hash, peer id, port, base timeout) never
/// change. The connection ID is reset to the protocol identifier at the start
/// of every cycle and only holds a tracker issued value between a valid
/// connect response and the end of that cycle.
pub struct Session {
    pub(crate) info_hash: InfoHash,
    pub(crate) peer_id: PeerId,
    pub(crate) port: Port,
    pub(crate) base_timeout: Duration,
    pub(crate) connection_id: ConnectionId,
    pub(crate) phase: Phase,
    pub(crate) transaction_ids: Box<dyn TransactionIdSource + Send>,
}
