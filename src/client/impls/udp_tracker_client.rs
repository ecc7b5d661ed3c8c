use std::collections::VecDeque;
use std::net::SocketAddr;
use log::{debug, error, warn};
use crate::backoff::structs::timer_slot::TimerSlot;
use crate::client::client::{open_socket, receive_from};
use crate::client::structs::udp_tracker_client::UdpTrackerClient;
use crate::client::traits::TrackerEventHandler;
use crate::common::structs::tracker_address::TrackerAddress;
use crate::config::structs::client_config::ClientConfig;
use crate::session::enums::announce_error::AnnounceError;
use crate::session::enums::session_effect::SessionEffect;
use crate::session::enums::session_input::SessionInput;
use crate::session::enums::session_state::SessionState;
use crate::session::enums::tracker_event::TrackerEvent;
use crate::session::structs::session::Session;
use crate::udp::enums::announce_event::AnnounceEvent;
use crate::udp::structs::announce_params::AnnounceParams;
use crate::udp::structs::info_hash::InfoHash;
use crate::udp::structs::peer_id::PeerId;
use crate::udp::udp::MAX_PACKET_SIZE;

enum Wake {
    Datagram(std::io::Result<(usize, SocketAddr)>),
    Retry,
    Interval,
}

impl UdpTrackerClient {
    pub fn new(peer_id: PeerId, info_hash: InfoHash, tracker: TrackerAddress, config: ClientConfig) -> UdpTrackerClient
    {
        let session = Session::new(info_hash, peer_id, config.listen_port, config.base_timeout());
        Self::with_session(session, tracker)
    }

    pub fn with_session(session: Session, tracker: TrackerAddress) -> UdpTrackerClient
    {
        UdpTrackerClient {
            session,
            tracker,
            resolved: None,
            socket: None,
            retry_timer: TimerSlot::new(),
            interval_timer: TimerSlot::new(),
            events: VecDeque::new(),
            last_announce: None,
        }
    }

    pub fn state(&self) -> SessionState {
        self.session.state()
    }

    pub fn tracker(&self) -> &TrackerAddress {
        &self.tracker
    }

    pub fn last_announce(&self) -> Option<(AnnounceEvent, AnnounceParams)> {
        self.last_announce
    }

    /// Number of armed timers: zero, or one of retry and interval.
    pub fn pending_timers(&self) -> usize {
        usize::from(self.retry_timer.is_armed()) + usize::from(self.interval_timer.is_armed())
    }

    /// Local address of the socket of the cycle in flight, if any.
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.socket.as_ref().and_then(|socket| socket.local_addr().ok())
    }

    /// Starts a handshake cycle, or reports why it cannot.
    ///
    /// The event and params are remembered for the automatic re-announce even
    /// when the call is rejected. After [`destroy`](Self::destroy) this does
    /// nothing at all.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn announce(&mut self, event: AnnounceEvent, params: AnnounceParams) {
        if self.state() == SessionState::Destroyed {
            debug!("[CLIENT] {} destroyed, not announcing", self.tracker);
            return;
        }
        self.last_announce = Some((event, params));

        if self.session.can_start() {
            if let Err(error) = self.refresh_address().await {
                warn!("[CLIENT] {error}");
                self.events.push_back(TrackerEvent::Error(error));
                return;
            }
        }

        let effects = self.session.handle(SessionInput::Start { event, params });
        self.apply(effects).await;
    }

    /// Same as [`announce`](Self::announce) with a raw event code.
    ///
    /// An unknown code is reported as an error and nothing is sent.
    pub async fn announce_code(&mut self, event: i32, params: AnnounceParams) {
        match AnnounceEvent::try_from(event) {
            Ok(event) => self.announce(event, params).await,
            Err(code) => {
                if self.state() == SessionState::Destroyed {
                    return;
                }
                error!("[CLIENT] unknown event: {code}");
                self.events.push_back(TrackerEvent::Error(AnnounceError::UnknownEvent(code)));
            }
        }
    }

    /// Cancels every timer, closes the socket and drops queued events.
    ///
    /// Idempotent. The client stays inert afterwards.
    pub fn destroy(&mut self) {
        for effect in self.session.handle(SessionInput::Destroy) {
            if let Some(packet) = self.apply_effect(effect) {
                debug!("[CLIENT] not sending {} bytes while destroying", packet.len());
            }
        }
        self.events.clear();
        debug!("[CLIENT] {} destroyed", self.tracker);
    }

    /// Waits for the next update or error.
    ///
    /// Returns `None` once destroyed, or when nothing is in flight and no
    /// re-announce is scheduled.
    pub async fn next_event(&mut self) -> Option<TrackerEvent> {
        let mut buffer = vec![0u8; MAX_PACKET_SIZE];
        loop {
            if let Some(event) = self.events.pop_front() {
                return Some(event);
            }
            if self.state() == SessionState::Destroyed {
                return None;
            }
            if self.socket.is_none() && self.pending_timers() == 0 {
                return None;
            }

            let wake = tokio::select! {
                received = receive_from(self.socket.as_ref(), &mut buffer) => Wake::Datagram(received),
                _ = self.retry_timer.elapsed() => Wake::Retry,
                _ = self.interval_timer.elapsed() => Wake::Interval,
            };

            match wake {
                Wake::Datagram(Ok((length, from))) => {
                    if Some(from) != self.resolved {
                        debug!("[CLIENT] dropping {length} bytes from {from}, expected {}", self.tracker);
                        continue;
                    }
                    if length == buffer.len() {
                        warn!("[CLIENT] datagram from {from} filled the {length} byte buffer and may be truncated");
                    }
                    debug!("[CLIENT] received {length} bytes from {from}");
                    let effects = self.session.handle(SessionInput::Datagram(buffer[..length].to_vec()));
                    self.apply(effects).await;
                }
                Wake::Datagram(Err(error)) => {
                    warn!("[CLIENT] receive from {} failed: {error}", self.tracker);
                }
                Wake::Retry => {
                    let effects = self.session.handle(SessionInput::RetryElapsed);
                    self.apply(effects).await;
                }
                Wake::Interval => {
                    if let Some((event, params)) = self.last_announce {
                        debug!("[CLIENT] interval elapsed, announcing to {} again", self.tracker);
                        self.announce(event, params).await;
                    }
                }
            }
        }
    }

    /// Dispatches events to `handler` until [`next_event`](Self::next_event) returns `None`.
    pub async fn run<H: TrackerEventHandler>(&mut self, handler: &mut H) {
        while let Some(event) = self.next_event().await {
            match event {
                TrackerEvent::Update(update) => handler.on_update(&update),
                TrackerEvent::Error(error) => handler.on_error(&error),
            }
        }
    }

    async fn refresh_address(&mut self) -> Result<(), AnnounceError> {
        match self.tracker.resolve().await {
            Ok(address) => {
                self.resolved = Some(address);
                Ok(())
            }
            Err(error) if self.resolved.is_some() => {
                warn!("[CLIENT] {error}, keeping the previous address");
                Ok(())
            }
            Err(_) => Err(AnnounceError::Unresolvable(self.tracker.to_string())),
        }
    }

    async fn apply(&mut self, effects: Vec<SessionEffect>) {
        for effect in effects {
            if let Some(packet) = self.apply_effect(effect) {
                self.send(&packet).await;
            }
        }
    }

    /// Applies everything but a send, which is handed back to the caller.
    fn apply_effect(&mut self, effect: SessionEffect) -> Option<Vec<u8>> {
        match effect {
            SessionEffect::OpenTransport => {
                self.socket = match open_socket() {
                    Ok(socket) => Some(socket),
                    Err(error) => {
                        warn!("[CLIENT] could not open a socket: {error}");
                        None
                    }
                };
            }
            SessionEffect::Send(packet) => return Some(packet),
            SessionEffect::CloseTransport => self.socket = None,
            SessionEffect::ArmRetry(timeout) => self.retry_timer.arm(timeout),
            SessionEffect::CancelRetry => self.retry_timer.cancel(),
            SessionEffect::ArmInterval(interval) => self.interval_timer.arm(interval),
            SessionEffect::CancelInterval => self.interval_timer.cancel(),
            SessionEffect::Emit(event) => self.events.push_back(event),
        }
        None
    }

    /// Waits for the socket to become writable. A failed send is left to the retry timer.
    async fn send(&self, packet: &[u8]) {
        let (Some(socket), Some(address)) = (self.socket.as_ref(), self.resolved) else {
            warn!("[CLIENT] no socket to send {} bytes to {}", packet.len(), self.tracker);
            return;
        };
        match socket.send_to(packet, address).await {
            Ok(length) => debug!("[CLIENT] sent {length} bytes to {address}"),
            Err(error) => warn!("[CLIENT] send to {address} failed: {error}"),
        }
    }
}
