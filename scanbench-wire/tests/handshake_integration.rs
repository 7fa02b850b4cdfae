//! Handshake over a real socket against a scripted peer.

use compio::buf::BufResult;
use compio::io::{AsyncReadExt, AsyncWriteExt};
use compio::net::{TcpListener, TcpStream};
use scanbench_core::endpoint::Endpoint;
use scanbench_core::error::ScanBenchError;
use scanbench_core::options::ConnectionOptions;
use scanbench_wire::handshake::{perform_handshake, HANDSHAKE_FRAME_LEN};
use scanbench_wire::{Connection, HandshakeRequest, ProtocolVersion, ScanQuery};
use std::time::Duration;

/// Accept one connection, check the handshake request, send `reply`.
async fn scripted_peer(reply: Vec<u8>) -> std::net::SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    compio::runtime::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        let BufResult(res, request) = stream.read_exact([0u8; HANDSHAKE_FRAME_LEN]).await;
        res.unwrap();
        assert_eq!(request.to_vec(), HandshakeRequest::default().encode());

        let BufResult(res, _) = stream.write_all(reply).await;
        res.unwrap();
        // Keep the socket open until the client is done
        compio::time::sleep(Duration::from_millis(200)).await;
    })
    .detach();

    addr
}

#[compio::test]
async fn test_accepted_handshake() {
    let addr = scripted_peer(vec![0x01, 0x00, 0x00, 0x00, 0x01]).await;
    let mut stream = TcpStream::connect(addr).await.unwrap();

    let response = perform_handshake(
        &mut stream,
        ProtocolVersion::default(),
        &ConnectionOptions::default(),
    )
    .await
    .expect("handshake should be accepted");
    assert_eq!(response.length, 1);
}

#[compio::test]
async fn test_rejected_handshake_leaves_rest_unread() {
    let addr = scripted_peer(vec![0x01, 0x00, 0x00, 0x00, 0x00, 0xAA, 0xBB]).await;
    let mut stream = TcpStream::connect(addr).await.unwrap();

    let err = perform_handshake(
        &mut stream,
        ProtocolVersion::default(),
        &ConnectionOptions::default(),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ScanBenchError::HandshakeRejected { code: 0 }));

    // The bytes after the result code are still on the socket
    let BufResult(res, rest) = stream.read_exact([0u8; 2]).await;
    res.unwrap();
    assert_eq!(rest, [0xAA, 0xBB]);
}

#[compio::test]
async fn test_truncated_reply_is_end_of_stream() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    compio::runtime::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        let BufResult(res, _) = stream.read_exact([0u8; HANDSHAKE_FRAME_LEN]).await;
        res.unwrap();
        // Length prefix only, then hang up
        let _ = stream.write_all(vec![0x01u8, 0x00, 0x00, 0x00]).await;
    })
    .detach();

    let mut stream = TcpStream::connect(addr).await.unwrap();
    let err = perform_handshake(
        &mut stream,
        ProtocolVersion::default(),
        &ConnectionOptions::default(),
    )
    .await
    .unwrap_err();
    assert!(
        matches!(err, ScanBenchError::EndOfStream { field: "handshake result" }),
        "unexpected error: {err:?}"
    );
}

#[compio::test]
async fn test_connection_measures_until_length_prefix() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    compio::runtime::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        let BufResult(res, _) = stream.read_exact([0u8; HANDSHAKE_FRAME_LEN]).await;
        res.unwrap();
        let BufResult(res, _) = stream.write_all(vec![0x01u8, 0x00, 0x00, 0x00, 0x01]).await;
        res.unwrap();

        let BufResult(res, query) = stream.read_exact([0u8; 29]).await;
        res.unwrap();
        assert_eq!(query.to_vec(), ScanQuery::default().encode(100));

        compio::time::sleep(Duration::from_millis(30)).await;
        // Length prefix plus payload the client must not wait for
        let _ = stream.write_all(vec![0x08u8, 0, 0, 0, 1, 2, 3, 4, 5, 6, 7, 8]).await;
    })
    .detach();

    let endpoint = Endpoint::new("127.0.0.1", addr.port());
    let mut conn = Connection::open(
        &endpoint,
        &ConnectionOptions::default(),
        ProtocolVersion::default(),
    )
    .await
    .unwrap();

    let elapsed = conn
        .measure_scan_query(&ScanQuery::default(), 100)
        .await
        .unwrap();
    assert!(elapsed >= Duration::from_millis(29), "elapsed {elapsed:?}");
    assert!(elapsed < Duration::from_secs(1), "elapsed {elapsed:?}");

    assert_eq!(conn.endpoint(), &endpoint);
    conn.close().await;
}
