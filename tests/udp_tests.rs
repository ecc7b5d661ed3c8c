mod common;

use std::io::{Cursor, Read};
use byteorder::{ByteOrder, NetworkEndian, ReadBytesExt};
use proptest::prelude::*;
use torrust_udp_client::udp::enums::announce_event::AnnounceEvent;
use torrust_udp_client::udp::enums::response_error::ResponseError;
use torrust_udp_client::udp::structs::announce_interval::AnnounceInterval;
use torrust_udp_client::udp::structs::announce_request::AnnounceRequest;
use torrust_udp_client::udp::structs::announce_response::AnnounceResponse;
use torrust_udp_client::udp::structs::connect_request::ConnectRequest;
use torrust_udp_client::udp::structs::connect_response::ConnectResponse;
use torrust_udp_client::udp::structs::connection_id::ConnectionId;
use torrust_udp_client::udp::structs::info_hash::InfoHash;
use torrust_udp_client::udp::structs::number_of_bytes::NumberOfBytes;
use torrust_udp_client::udp::structs::number_of_peers::NumberOfPeers;
use torrust_udp_client::udp::structs::peer_id::PeerId;
use torrust_udp_client::udp::structs::peer_key::PeerKey;
use torrust_udp_client::udp::structs::port::Port;
use torrust_udp_client::udp::structs::transaction_id::TransactionId;
use torrust_udp_client::udp::udp::{ANNOUNCE_KEY, NUM_WANT, PROTOCOL_IDENTIFIER};

/// Field by field reading of an announce request, independent of the encoder.
struct ParsedAnnounce {
    connection_id: i64,
    action: i32,
    transaction_id: i32,
    info_hash: [u8; 20],
    peer_id: [u8; 20],
    downloaded: u64,
    left: u64,
    uploaded: u64,
    event: i32,
    ip: u32,
    key: u32,
    num_want: u32,
    port: u16,
}

fn parse_announce(bytes: &[u8]) -> ParsedAnnounce {
    let mut cursor = Cursor::new(bytes);
    let twenty = |cursor: &mut Cursor<&[u8]>| {
        let mut field = [0u8; 20];
        cursor.read_exact(&mut field).unwrap();
        field
    };
    ParsedAnnounce {
        connection_id: cursor.read_i64::<NetworkEndian>().unwrap(),
        action: cursor.read_i32::<NetworkEndian>().unwrap(),
        transaction_id: cursor.read_i32::<NetworkEndian>().unwrap(),
        info_hash: twenty(&mut cursor),
        peer_id: twenty(&mut cursor),
        downloaded: cursor.read_u64::<NetworkEndian>().unwrap(),
        left: cursor.read_u64::<NetworkEndian>().unwrap(),
        uploaded: cursor.read_u64::<NetworkEndian>().unwrap(),
        event: cursor.read_i32::<NetworkEndian>().unwrap(),
        ip: cursor.read_u32::<NetworkEndian>().unwrap(),
        key: cursor.read_u32::<NetworkEndian>().unwrap(),
        num_want: cursor.read_u32::<NetworkEndian>().unwrap(),
        port: cursor.read_u16::<NetworkEndian>().unwrap(),
    }
}

fn announce_event() -> impl Strategy<Value = AnnounceEvent> {
    prop_oneof![
        Just(AnnounceEvent::None),
        Just(AnnounceEvent::Completed),
        Just(AnnounceEvent::Started),
        Just(AnnounceEvent::Stopped),
    ]
}

proptest! {
    #[test]
    fn test_connect_request_fields(transaction_id in any::<i32>()) {
        let bytes = ConnectRequest { transaction_id: TransactionId(transaction_id) }.to_bytes();
        prop_assert_eq!(bytes.len(), 16);
        prop_assert_eq!(NetworkEndian::read_i64(&bytes[0..8]), PROTOCOL_IDENTIFIER);
        prop_assert_eq!(NetworkEndian::read_i32(&bytes[8..12]), 0);
        prop_assert_eq!(NetworkEndian::read_i32(&bytes[12..16]), transaction_id);
    }

    #[test]
    fn test_announce_request_fields(
        connection_id in any::<i64>(),
        transaction_id in any::<i32>(),
        info_hash in any::<[u8; 20]>(),
        peer_id in any::<[u8; 20]>(),
        downloaded in any::<u64>(),
        left in any::<u64>(),
        uploaded in any::<u64>(),
        event in announce_event(),
        port in any::<u16>(),
    ) {
        let request = AnnounceRequest {
            connection_id: ConnectionId(connection_id),
            transaction_id: TransactionId(transaction_id),
            info_hash: InfoHash(info_hash),
            peer_id: PeerId(peer_id),
            bytes_downloaded: NumberOfBytes(downloaded),
            bytes_left: NumberOfBytes(left),
            bytes_uploaded: NumberOfBytes(uploaded),
            event,
            key: PeerKey(ANNOUNCE_KEY),
            peers_wanted: NumberOfPeers(NUM_WANT),
            port: Port(port),
        };
        let bytes = request.to_bytes();
        prop_assert_eq!(bytes.len(), 98);

        let parsed = parse_announce(&bytes);
        prop_assert_eq!(parsed.connection_id, connection_id);
        prop_assert_eq!(parsed.action, 1);
        prop_assert_eq!(parsed.transaction_id, transaction_id);
        prop_assert_eq!(parsed.info_hash, info_hash);
        prop_assert_eq!(parsed.peer_id, peer_id);
        prop_assert_eq!(parsed.downloaded, downloaded);
        prop_assert_eq!(parsed.left, left);
        prop_assert_eq!(parsed.uploaded, uploaded);
        prop_assert_eq!(parsed.event, event.to_i32());
        prop_assert_eq!(parsed.ip, 0);
        prop_assert_eq!(parsed.key, 0);
        prop_assert_eq!(parsed.num_want, 50);
        prop_assert_eq!(parsed.port, port);
    }

    #[test]
    fn test_connect_response_accepts_only_16_bytes(
        transaction_id in any::<i32>(),
        connection_id in any::<i64>(),
        extra in proptest::collection::vec(any::<u8>(), 1..8),
    ) {
        let response = ConnectResponse {
            connection_id: ConnectionId(connection_id),
            transaction_id: TransactionId(transaction_id),
        };
        let bytes = response.to_bytes();
        prop_assert_eq!(ConnectResponse::from_bytes(&bytes, TransactionId(transaction_id)), Ok(response));

        let mut longer = bytes.to_vec();
        longer.extend_from_slice(&extra);
        prop_assert!(ConnectResponse::from_bytes(&longer, TransactionId(transaction_id)).is_err());
        prop_assert!(ConnectResponse::from_bytes(&bytes[..15], TransactionId(transaction_id)).is_err());
    }

    #[test]
    fn test_announce_response_counters(
        transaction_id in any::<i32>(),
        interval in any::<u32>(),
        leechers in any::<u32>(),
        seeders in any::<u32>(),
        peers in proptest::collection::vec(any::<u8>(), 0..120),
    ) {
        let mut bytes = vec![];
        bytes.extend_from_slice(&1i32.to_be_bytes());
        bytes.extend_from_slice(&transaction_id.to_be_bytes());
        bytes.extend_from_slice(&interval.to_be_bytes());
        bytes.extend_from_slice(&leechers.to_be_bytes());
        bytes.extend_from_slice(&seeders.to_be_bytes());
        bytes.extend_from_slice(&peers);

        let response = AnnounceResponse::from_bytes(&bytes, TransactionId(transaction_id)).unwrap();
        prop_assert_eq!(response.announce_interval, AnnounceInterval(interval));
        prop_assert_eq!(response.leechers, NumberOfPeers(NetworkEndian::read_u32(&bytes[12..16])));
        prop_assert_eq!(response.seeders, NumberOfPeers(NetworkEndian::read_u32(&bytes[16..20])));
        prop_assert_eq!(response.peers, peers);
    }

    #[test]
    fn test_any_other_transaction_id_is_rejected(expected in any::<i32>(), received in any::<i32>()) {
        prop_assume!(expected != received);
        let mut bytes = vec![];
        bytes.extend_from_slice(&1i32.to_be_bytes());
        bytes.extend_from_slice(&received.to_be_bytes());
        bytes.extend_from_slice(&[0u8; 12]);
        prop_assert_eq!(
            AnnounceResponse::from_bytes(&bytes, TransactionId(expected)),
            Err(ResponseError::TransactionMismatch { expected: TransactionId(expected), received: TransactionId(received) })
        );
    }

    #[test]
    fn test_short_announce_responses_are_rejected(bytes in proptest::collection::vec(any::<u8>(), 0..20)) {
        prop_assert!(AnnounceResponse::from_bytes(&bytes, TransactionId(0)).is_err());
    }
}

#[test]
fn test_compact_peers_helper_matches_decoder() {
    let peers = torrust_udp_client::common::common::compact_peers_to_strings(&common::compact_peers(3));
    assert_eq!(peers, vec!["10.0.0.1:6881", "10.0.0.2:6882", "10.0.0.3:6883"]);
}
