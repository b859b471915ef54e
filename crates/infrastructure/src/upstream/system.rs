use async_trait::async_trait;
use sentry_dns_application::ports::UpstreamResolver;
use sentry_dns_domain::DomainError;
use std::net::IpAddr;
use std::time::Duration;
use tracing::debug;

/// Resolves through the operating system's resolver (`getaddrinfo`).
pub struct SystemResolver {
    timeout: Duration,
}

impl SystemResolver {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

#[async_trait]
impl UpstreamResolver for SystemResolver {
    async fn lookup(&self, domain: &str) -> Result<Vec<IpAddr>, DomainError> {
        let addrs_iter = tokio::time::timeout(self.timeout, tokio::net::lookup_host((domain, 0)))
            .await
            .map_err(|_| DomainError::TransportTimeout {
                server: "system resolver".to_string(),
            })?
            .map_err(|e| {
                DomainError::IoError(format!("System resolution failed for {}: {}", domain, e))
            })?;

        let addresses: Vec<IpAddr> = addrs_iter.map(|addr| addr.ip()).collect();
        debug!(domain = %domain, count = addresses.len(), "System resolver answered");

        if addresses.is_empty() {
            return Err(DomainError::NxDomain);
        }
        Ok(addresses)
    }
}
