#![allow(dead_code)]
use std::borrow::Cow;
use std::net::SocketAddr;
use std::time::Duration;
use byteorder::{ByteOrder, NetworkEndian};
use rand::RngExt;
use tokio::net::UdpSocket;
use torrust_udp_client::client::structs::udp_tracker_client::UdpTrackerClient;
use torrust_udp_client::common::structs::tracker_address::TrackerAddress;
use torrust_udp_client::config::structs::client_config::ClientConfig;
use torrust_udp_client::udp::structs::announce_interval::AnnounceInterval;
use torrust_udp_client::udp::structs::announce_response::AnnounceResponse;
use torrust_udp_client::udp::structs::connect_response::ConnectResponse;
use torrust_udp_client::udp::structs::connection_id::ConnectionId;
use torrust_udp_client::udp::structs::error_response::ErrorResponse;
use torrust_udp_client::udp::structs::info_hash::InfoHash;
use torrust_udp_client::udp::structs::number_of_peers::NumberOfPeers;
use torrust_udp_client::udp::structs::peer_id::PeerId;
use torrust_udp_client::udp::structs::transaction_id::TransactionId;

pub const CONNECTION_ID: i64 = 0x5EED_0000_0000_0001;

/// A scripted UDP tracker on the loopback interface.
pub struct FakeTracker {
    pub socket: UdpSocket,
}

impl FakeTracker {
    pub async fn bind() -> FakeTracker {
        FakeTracker { socket: UdpSocket::bind("127.0.0.1:0").await.unwrap() }
    }

    pub fn address(&self) -> TrackerAddress {
        TrackerAddress::new("127.0.0.1", self.socket.local_addr().unwrap().port())
    }

    /// Next request, failing the test after five seconds.
    pub async fn recv(&self) -> (Vec<u8>, SocketAddr) {
        self.try_recv(Duration::from_secs(5)).await.expect("no request reached the tracker")
    }

    pub async fn try_recv(&self, wait: Duration) -> Option<(Vec<u8>, SocketAddr)> {
        let mut buffer = [0u8; 2048];
        match tokio::time::timeout(wait, self.socket.recv_from(&mut buffer)).await {
            Ok(Ok((length, from))) => Some((buffer[..length].to_vec(), from)),
            _ => None,
        }
    }

    pub async fn send(&self, bytes: &[u8], to: SocketAddr) {
        self.socket.send_to(bytes, to).await.unwrap();
    }

    /// Answers the next connect request and returns the client address.
    pub async fn accept_connect(&self) -> SocketAddr {
        let (request, from) = self.recv().await;
        assert_eq!(request.len(), 16, "expected a connect request");
        let response = ConnectResponse {
            connection_id: ConnectionId(CONNECTION_ID),
            transaction_id: transaction_id(&request),
        };
        self.send(&response.to_bytes(), from).await;
        from
    }

    /// Receives the next announce request without answering it.
    pub async fn recv_announce(&self) -> (Vec<u8>, SocketAddr) {
        let (request, from) = self.recv().await;
        assert_eq!(request.len(), 98, "expected an announce request");
        assert_eq!(NetworkEndian::read_i64(&request[0..8]), CONNECTION_ID);
        (request, from)
    }

    pub async fn reply_announce(&self, request: &[u8], to: SocketAddr, interval: u32, leechers: u32, seeders: u32, peers: Vec<u8>) {
        let response = AnnounceResponse {
            transaction_id: transaction_id(request),
            announce_interval: AnnounceInterval(interval),
            leechers: NumberOfPeers(leechers),
            seeders: NumberOfPeers(seeders),
            peers,
        };
        self.send(&response.to_bytes(), to).await;
    }

    pub async fn reply_error(&self, request: &[u8], to: SocketAddr, message: &'static str) {
        let response = ErrorResponse {
            transaction_id: transaction_id(request),
            message: Cow::Borrowed(message),
        };
        self.send(&response.to_bytes(), to).await;
    }
}

pub fn transaction_id(request: &[u8]) -> TransactionId {
    TransactionId(NetworkEndian::read_i32(&request[12..16]))
}

/// `count` peers at 10.0.0.1:6881, 10.0.0.2:6882, ...
pub fn compact_peers(count: u8) -> Vec<u8> {
    (1..=count).flat_map(|n| {
        let port = 6880u16 + u16::from(n);
        [10, 0, 0, n, (port >> 8) as u8, port as u8]
    }).collect()
}

pub fn random_info_hash() -> InfoHash {
    let mut rng = rand::rng();
    InfoHash(rng.random())
}

pub fn random_peer_id() -> PeerId {
    let mut rng = rand::rng();
    PeerId(rng.random())
}

pub fn create_client(tracker: TrackerAddress, config: ClientConfig) -> UdpTrackerClient {
    UdpTrackerClient::new(random_peer_id(), random_info_hash(), tracker, config)
}
