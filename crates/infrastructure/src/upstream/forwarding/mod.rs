mod message_builder;
mod response_parser;

pub use message_builder::MessageBuilder;
pub use response_parser::{ResponseParser, UpstreamResponse};

use super::UdpTransport;
use async_trait::async_trait;
use hickory_proto::op::ResponseCode;
use sentry_dns_application::ports::UpstreamResolver;
use sentry_dns_domain::DomainError;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use tracing::debug;

/// Forwards an A query to one upstream DNS server over UDP.
pub struct ForwardingResolver {
    transport: UdpTransport,
    timeout: Duration,
}

impl ForwardingResolver {
    pub fn new(server_addr: SocketAddr, timeout: Duration) -> Self {
        Self {
            transport: UdpTransport::new(server_addr),
            timeout,
        }
    }
}

#[async_trait]
impl UpstreamResolver for ForwardingResolver {
    async fn lookup(&self, domain: &str) -> Result<Vec<IpAddr>, DomainError> {
        let (id, query) = MessageBuilder::build_a_query(domain)?;
        let bytes = self.transport.send(&query, self.timeout).await?;
        let response = ResponseParser::parse(&bytes)?;

        if response.id != id {
            return Err(DomainError::InvalidDnsResponse(format!(
                "Response id {} does not match query id {}",
                response.id, id
            )));
        }

        debug!(
            domain = %domain,
            server = %self.transport.server_addr(),
            rcode = ?response.rcode,
            addresses = response.addresses.len(),
            "Forwarded query answered"
        );

        match response.rcode {
            ResponseCode::NoError => Ok(response.addresses),
            ResponseCode::NXDomain => Err(DomainError::NxDomain),
            other => Err(DomainError::InvalidDnsResponse(format!(
                "Upstream {} answered {:?}",
                self.transport.server_addr(),
                other
            ))),
        }
    }
}
