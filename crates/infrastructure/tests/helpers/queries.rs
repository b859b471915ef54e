use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::UdpSocket;

/// Standard query (RD set) for the given `(domain, qtype)` pairs.
pub fn build_query(id: u16, questions: &[(&str, u16)]) -> Vec<u8> {
    build_query_with_flags(id, 0x0100, questions)
}

pub fn build_query_with_flags(id: u16, flags: u16, questions: &[(&str, u16)]) -> Vec<u8> {
    let mut packet = Vec::with_capacity(512);
    packet.extend_from_slice(&id.to_be_bytes());
    packet.extend_from_slice(&flags.to_be_bytes());
    packet.extend_from_slice(&(questions.len() as u16).to_be_bytes());
    packet.extend_from_slice(&[0, 0, 0, 0, 0, 0]);

    for (domain, qtype) in questions {
        for label in domain.split('.').filter(|l| !l.is_empty()) {
            packet.push(label.len() as u8);
            packet.extend_from_slice(label.as_bytes());
        }
        packet.push(0);
        packet.extend_from_slice(&qtype.to_be_bytes());
        packet.extend_from_slice(&1u16.to_be_bytes());
    }
    packet
}

/// Sends one datagram from a fresh socket and waits for the reply.
pub async fn exchange(server: SocketAddr, packet: &[u8]) -> Vec<u8> {
    let client = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    client.send_to(packet, server).await.unwrap();

    let mut buf = vec![0u8; 4096];
    let (len, _) = tokio::time::timeout(Duration::from_secs(2), client.recv_from(&mut buf))
        .await
        .expect("no response from server")
        .unwrap();
    buf.truncate(len);
    buf
}

/// Sends one datagram and asserts that nothing comes back within `wait`.
pub async fn send_and_expect_silence(server: SocketAddr, packet: &[u8], wait: Duration) {
    let client = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    client.send_to(packet, server).await.unwrap();

    let mut buf = vec![0u8; 4096];
    let result = tokio::time::timeout(wait, client.recv_from(&mut buf)).await;
    assert!(result.is_err(), "expected no response");
}
