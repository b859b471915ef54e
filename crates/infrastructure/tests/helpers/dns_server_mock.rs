use std::net::{Ipv4Addr, SocketAddr};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::net::UdpSocket;
use tokio::sync::oneshot;

#[derive(Debug, Clone, Copy)]
pub enum MockReply {
    Answer(Ipv4Addr),
    NxDomain,
    WrongId,
    Silent,
}

/// Upstream DNS server on loopback that answers every query the same way.
pub struct MockDnsServer {
    addr: SocketAddr,
    queries: Arc<AtomicUsize>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start(reply: MockReply) -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = socket.local_addr()?;
        let queries = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&queries);

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            counter.fetch_add(1, Ordering::SeqCst);
                            if let Some(response) = Self::build_mock_response(&buf[..len], reply) {
                                let _ = socket.send_to(&response, peer).await;
                            }
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            queries,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    fn build_mock_response(query: &[u8], reply: MockReply) -> Option<Vec<u8>> {
        if query.len() < 12 {
            return None;
        }

        let mut response = Vec::with_capacity(512);

        match reply {
            MockReply::Silent => return None,
            MockReply::WrongId => {
                let id = u16::from_be_bytes([query[0], query[1]]).wrapping_add(1);
                response.extend_from_slice(&id.to_be_bytes());
            }
            _ => response.extend_from_slice(&query[0..2]),
        }

        response.push(0x81);
        response.push(if matches!(reply, MockReply::NxDomain) {
            0x83
        } else {
            0x80
        });

        response.extend_from_slice(&query[4..6]);
        let answers: u16 = if matches!(reply, MockReply::NxDomain) {
            0
        } else {
            1
        };
        response.extend_from_slice(&answers.to_be_bytes());
        response.extend_from_slice(&[0x00, 0x00]);
        response.extend_from_slice(&[0x00, 0x00]);
        response.extend_from_slice(&query[12..]);

        let address = match reply {
            MockReply::Answer(address) => address,
            MockReply::WrongId => Ipv4Addr::new(10, 0, 0, 1),
            _ => return Some(response),
        };

        response.extend_from_slice(&[
            0xc0, 0x0c, // pointer to question name
            0x00, 0x01, // A
            0x00, 0x01, // IN
            0x00, 0x00, 0x00, 0x3c, // TTL 60
            0x00, 0x04,
        ]);
        response.extend_from_slice(&address.octets());

        Some(response)
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
