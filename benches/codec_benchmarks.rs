// Performance benchmarks for the codec and session
// Run with: cargo bench

use std::hint::black_box;
use std::time::Duration;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::RngExt;
use torrust_udp_client::common::common::compact_peers_to_strings;
use torrust_udp_client::session::enums::session_input::SessionInput;
use torrust_udp_client::session::structs::session::Session;
use torrust_udp_client::udp::enums::announce_event::AnnounceEvent;
use torrust_udp_client::udp::structs::announce_params::AnnounceParams;
use torrust_udp_client::udp::structs::announce_request::AnnounceRequest;
use torrust_udp_client::udp::structs::announce_response::AnnounceResponse;
use torrust_udp_client::udp::structs::connection_id::ConnectionId;
use torrust_udp_client::udp::structs::info_hash::InfoHash;
use torrust_udp_client::udp::structs::number_of_bytes::NumberOfBytes;
use torrust_udp_client::udp::structs::number_of_peers::NumberOfPeers;
use torrust_udp_client::udp::structs::peer_id::PeerId;
use torrust_udp_client::udp::structs::peer_key::PeerKey;
use torrust_udp_client::udp::structs::port::Port;
use torrust_udp_client::udp::structs::transaction_id::TransactionId;
use torrust_udp_client::udp::udp::{ANNOUNCE_KEY, NUM_WANT};

fn random_info_hash() -> InfoHash {
    let mut rng = rand::rng();
    InfoHash(rng.random())
}

fn random_peer_id() -> PeerId {
    let mut rng = rand::rng();
    PeerId(rng.random())
}

fn announce_response_bytes(peers: usize) -> Vec<u8> {
    let mut bytes = vec![];
    bytes.extend_from_slice(&1i32.to_be_bytes());
    bytes.extend_from_slice(&7i32.to_be_bytes());
    bytes.extend_from_slice(&1800u32.to_be_bytes());
    bytes.extend_from_slice(&10u32.to_be_bytes());
    bytes.extend_from_slice(&20u32.to_be_bytes());
    for i in 0..peers {
        bytes.extend_from_slice(&[10, 0, (i / 256) as u8, (i % 256) as u8, 0x1A, 0xE1]);
    }
    bytes
}

fn bench_announce_request_encoding(c: &mut Criterion) {
    let request = AnnounceRequest {
        connection_id: ConnectionId(0x0102_0304_0506_0708),
        transaction_id: TransactionId(42),
        info_hash: random_info_hash(),
        peer_id: random_peer_id(),
        bytes_downloaded: NumberOfBytes(1024),
        bytes_left: NumberOfBytes(0),
        bytes_uploaded: NumberOfBytes(4096),
        event: AnnounceEvent::Started,
        key: PeerKey(ANNOUNCE_KEY),
        peers_wanted: NumberOfPeers(NUM_WANT),
        port: Port(6881),
    };

    c.bench_function("announce_request_to_bytes", |b| {
        b.iter(|| black_box(black_box(&request).to_bytes()));
    });
}

fn bench_announce_response_decoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("announce_response_decode");

    for peers in [0usize, 50, 200].iter() {
        let bytes = announce_response_bytes(*peers);
        group.bench_with_input(BenchmarkId::from_parameter(peers), &bytes, |b, bytes| {
            b.iter(|| {
                let response = AnnounceResponse::from_bytes(black_box(bytes), TransactionId(7));
                black_box(response.map(|response| compact_peers_to_strings(&response.peers)))
            });
        });
    }

    group.finish();
}

fn bench_session_handshake(c: &mut Criterion) {
    c.bench_function("session_start_and_retry", |b| {
        b.iter(|| {
            let mut session = Session::new(random_info_hash(), random_peer_id(), 6881, Duration::from_millis(15000));
            black_box(session.handle(SessionInput::Start { event: AnnounceEvent::Started, params: AnnounceParams::default() }));
            black_box(session.handle(SessionInput::RetryElapsed));
            black_box(session.handle(SessionInput::Destroy));
        });
    });
}

criterion_group!(
    benches,
    bench_announce_request_encoding,
    bench_announce_response_decoding,
    bench_session_handshake,
);

criterion_main!(benches);
