use hickory_proto::op::{Message, ResponseCode};
use hickory_proto::rr::RData;
use sentry_dns_domain::DomainError;
use std::net::IpAddr;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub id: u16,
    pub rcode: ResponseCode,
    pub truncated: bool,
    /// A and AAAA records of the answer section, in order.
    pub addresses: Vec<IpAddr>,
}

pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(response_bytes: &[u8]) -> Result<UpstreamResponse, DomainError> {
        if response_bytes.len() < 2 {
            return Err(DomainError::InvalidDnsResponse(
                "Response shorter than a message id".to_string(),
            ));
        }
        let id = u16::from_be_bytes([response_bytes[0], response_bytes[1]]);

        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        let rcode = message.response_code();
        let truncated = message.truncated();

        let addresses: Vec<IpAddr> = message
            .answers()
            .iter()
            .filter_map(|record| match record.data() {
                RData::A(a) => Some(IpAddr::V4(a.0)),
                RData::AAAA(aaaa) => Some(IpAddr::V6(aaaa.0)),
                _ => None,
            })
            .collect();

        debug!(
            rcode = ?rcode,
            addresses = addresses.len(),
            truncated = truncated,
            "DNS response parsed"
        );

        Ok(UpstreamResponse {
            id,
            rcode,
            truncated,
            addresses,
        })
    }
}
