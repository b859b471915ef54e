use crate::wire::{Header, Question};
use std::net::SocketAddr;

/// One decoded datagram, owned by a single pipeline task until its response is sent.
#[derive(Debug, Clone)]
pub struct DnsRequest {
    pub client: SocketAddr,
    pub header: Header,
    pub questions: Vec<Question>,
}

impl DnsRequest {
    pub fn new(client: SocketAddr, header: Header, questions: Vec<Question>) -> Self {
        Self {
            client,
            header,
            questions,
        }
    }
}

/// Cache key form of a domain: ASCII-lowercased, without the trailing dot.
pub fn normalize_domain(domain: &str) -> String {
    domain.trim_end_matches('.').to_ascii_lowercase()
}
