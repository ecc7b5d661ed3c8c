use std::time::Duration;
use log::{debug, info, warn};
use crate::backoff::enums::backoff_step::BackoffStep;
use crate::backoff::structs::backoff::Backoff;
use crate::common::common::compact_peers_to_strings;
use crate::session::enums::announce_error::AnnounceError;
use crate::session::enums::phase::Phase;
use crate::session::enums::session_effect::SessionEffect;
use crate::session::enums::session_input::SessionInput;
use crate::session::enums::session_state::SessionState;
use crate::session::enums::tracker_event::TrackerEvent;
use crate::session::structs::announce_update::AnnounceUpdate;
use crate::session::structs::random_transaction_ids::RandomTransactionIds;
use crate::session::structs::session::Session;
use crate::session::traits::TransactionIdSource;
use crate::udp::enums::action::Action;
use crate::udp::enums::announce_event::AnnounceEvent;
use crate::udp::enums::response_error::ResponseError;
use crate::udp::structs::announce_params::AnnounceParams;
use crate::udp::structs::announce_request::AnnounceRequest;
use crate::udp::structs::announce_response::AnnounceResponse;
use crate::udp::structs::connect_request::ConnectRequest;
use crate::udp::structs::connect_response::ConnectResponse;
use crate::udp::structs::connection_id::ConnectionId;
use crate::udp::structs::error_response::ErrorResponse;
use crate::udp::structs::info_hash::InfoHash;
use crate::udp::structs::number_of_bytes::NumberOfBytes;
use crate::udp::structs::number_of_peers::NumberOfPeers;
use crate::udp::structs::peer_id::PeerId;
use crate::udp::structs::peer_key::PeerKey;
use crate::udp::structs::port::Port;
use crate::udp::structs::transaction_id::TransactionId;
use crate::udp::udp::{peek_action, ANNOUNCE_KEY, NUM_WANT, PROTOCOL_IDENTIFIER};

impl Session {
    pub fn new(info_hash: InfoHash, peer_id: PeerId, listen_port: u16, base_timeout: Duration) -> Session
    {
        Self::with_transaction_ids(info_hash, peer_id, listen_port, base_timeout, Box::new(RandomTransactionIds))
    }

    pub fn with_transaction_ids(
        info_hash: InfoHash,
        peer_id: PeerId,
        listen_port: u16,
        base_timeout: Duration,
        transaction_ids: Box<dyn TransactionIdSource + Send>,
    ) -> Session
    {
        Session {
            info_hash,
            peer_id,
            port: Port(listen_port),
            base_timeout,
            connection_id: ConnectionId(PROTOCOL_IDENTIFIER),
            phase: Phase::Idle,
            transaction_ids,
        }
    }

    pub fn state(&self) -> SessionState {
        self.phase.state()
    }

    pub fn connection_id(&self) -> ConnectionId {
        self.connection_id
    }

    /// True when a `Start` would begin a new cycle instead of being rejected.
    pub fn can_start(&self) -> bool {
        matches!(self.phase, Phase::Idle | Phase::Waiting)
    }

    #[tracing::instrument(skip(self), level = "debug")]
    pub fn handle(&mut self, input: SessionInput) -> Vec<SessionEffect> {
        let before = self.state();
        let effects = match input {
            SessionInput::Start { event, params } => self.start(event, params),
            SessionInput::Datagram(bytes) => self.on_datagram(&bytes),
            SessionInput::RetryElapsed => self.on_retry_elapsed(),
            SessionInput::Destroy => self.destroy(),
        };
        let after = self.state();
        if before != after {
            debug!("[SESSION] {before} -> {after}");
        }
        effects
    }

    fn start(&mut self, event: AnnounceEvent, params: AnnounceParams) -> Vec<SessionEffect> {
        match self.phase {
            Phase::Destroyed => return vec![],
            Phase::AwaitingConnect { .. } | Phase::AwaitingAnnounce { .. } => {
                warn!("[SESSION] announce requested while a handshake is in flight");
                return vec![SessionEffect::Emit(TrackerEvent::Error(AnnounceError::AnnounceInFlight))];
            }
            Phase::Idle | Phase::Waiting => {}
        }

        let mut effects = vec![SessionEffect::CancelInterval, SessionEffect::CancelRetry];

        self.connection_id = ConnectionId(PROTOCOL_IDENTIFIER);
        let transaction_id = self.transaction_ids.next_transaction_id();
        let packet = ConnectRequest { transaction_id }.to_bytes().to_vec();
        let backoff = Backoff::new(packet.clone(), self.base_timeout);

        debug!("[SESSION] connect request {transaction_id} for {} ({event})", self.info_hash);
        effects.push(SessionEffect::OpenTransport);
        effects.push(SessionEffect::Send(packet));
        effects.push(SessionEffect::ArmRetry(backoff.current_timeout()));

        self.phase = Phase::AwaitingConnect { transaction_id, backoff, event, params };
        effects
    }

    fn on_datagram(&mut self, bytes: &[u8]) -> Vec<SessionEffect> {
        match std::mem::replace(&mut self.phase, Phase::Idle) {
            Phase::AwaitingConnect { transaction_id, event, params, .. } => {
                let mut effects = vec![SessionEffect::CancelRetry];
                let outcome = Self::screen(bytes, transaction_id)
                    .and_then(|_| ConnectResponse::from_bytes(bytes, transaction_id).map_err(AnnounceError::from));
                match outcome {
                    Ok(response) => {
                        self.connection_id = response.connection_id;
                        self.send_announce(&mut effects, event, params);
                    }
                    Err(error) => Self::abort(&mut effects, error),
                }
                effects
            }
            Phase::AwaitingAnnounce { transaction_id, .. } => {
                let mut effects = vec![SessionEffect::CancelRetry];
                let outcome = Self::screen(bytes, transaction_id)
                    .and_then(|_| AnnounceResponse::from_bytes(bytes, transaction_id).map_err(AnnounceError::from));
                match outcome {
                    Ok(response) => {
                        let update = AnnounceUpdate {
                            interval: response.announce_interval.0,
                            leechers: response.leechers.0,
                            seeds: response.seeders.0,
                            peers: compact_peers_to_strings(&response.peers),
                        };
                        info!(
                            "[SESSION] announced {}: {} seeds, {} leechers, {} peers, next in {}s",
                            self.info_hash, update.seeds, update.leechers, update.peers.len(), update.interval
                        );
                        let interval = Duration::from_secs(u64::from(update.interval));
                        effects.push(SessionEffect::CloseTransport);
                        effects.push(SessionEffect::Emit(TrackerEvent::Update(update)));
                        effects.push(SessionEffect::ArmInterval(interval));
                        self.phase = Phase::Waiting;
                    }
                    Err(error) => Self::abort(&mut effects, error),
                }
                effects
            }
            other => {
                debug!("[SESSION] ignoring {} byte datagram while {}", bytes.len(), other.state());
                self.phase = other;
                vec![]
            }
        }
    }

    fn on_retry_elapsed(&mut self) -> Vec<SessionEffect> {
        let step = match &mut self.phase {
            Phase::AwaitingConnect { backoff, .. } | Phase::AwaitingAnnounce { backoff, .. } => backoff.on_elapsed(),
            _ => return vec![],
        };

        match step {
            BackoffStep::Resend { payload, next_timeout } => {
                debug!("[SESSION] no answer, resending and waiting {next_timeout:?}");
                vec![SessionEffect::Send(payload), SessionEffect::ArmRetry(next_timeout)]
            }
            BackoffStep::Exhausted { timeout } => {
                self.phase = Phase::Idle;
                let mut effects = vec![];
                let millis = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
                Self::abort(&mut effects, AnnounceError::RetryExhausted(millis));
                effects
            }
        }
    }

    fn destroy(&mut self) -> Vec<SessionEffect> {
        if matches!(self.phase, Phase::Destroyed) {
            return vec![];
        }
        self.phase = Phase::Destroyed;
        vec![SessionEffect::CancelRetry, SessionEffect::CancelInterval, SessionEffect::CloseTransport]
    }

    fn send_announce(&mut self, effects: &mut Vec<SessionEffect>, event: AnnounceEvent, params: AnnounceParams) {
        let transaction_id = self.transaction_ids.next_transaction_id();
        let packet = AnnounceRequest {
            connection_id: self.connection_id,
            transaction_id,
            info_hash: self.info_hash,
            peer_id: self.peer_id,
            bytes_downloaded: NumberOfBytes(params.downloaded),
            bytes_left: NumberOfBytes(params.left),
            bytes_uploaded: NumberOfBytes(params.uploaded),
            event,
            key: PeerKey(ANNOUNCE_KEY),
            peers_wanted: NumberOfPeers(NUM_WANT),
            port: self.port,
        }.to_bytes().to_vec();
        let backoff = Backoff::new(packet.clone(), self.base_timeout);

        debug!("[SESSION] announce request {transaction_id} on connection {:x}", self.connection_id.0);
        effects.push(SessionEffect::Send(packet));
        effects.push(SessionEffect::ArmRetry(backoff.current_timeout()));
        self.phase = Phase::AwaitingAnnounce { transaction_id, backoff };
    }

    /// Handles the actions no phase expects: tracker errors and unknown codes.
    fn screen(bytes: &[u8], transaction_id: TransactionId) -> Result<(), AnnounceError> {
        let Some(action) = peek_action(bytes) else {
            return Ok(());
        };
        match Action::from_i32(action) {
            Some(Action::Error) => {
                let response = ErrorResponse::from_bytes(bytes, transaction_id)?;
                Err(AnnounceError::Tracker(response.message.into_owned()))
            }
            None => Err(ResponseError::UnsupportedAction(action).into()),
            Some(_) => Ok(()),
        }
    }

    /// Ends the phase: the caller has already left `self.phase` at `Idle`.
    fn abort(effects: &mut Vec<SessionEffect>, error: AnnounceError) {
        warn!("[SESSION] announce failed: {error}");
        effects.push(SessionEffect::CloseTransport);
        effects.push(SessionEffect::Emit(TrackerEvent::Error(error)));
    }
}
