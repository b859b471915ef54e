use async_trait::async_trait;
use sentry_dns_domain::DomainError;
use std::net::IpAddr;

/// Fallback resolution for names the cache cannot answer.
#[async_trait]
pub trait UpstreamResolver: Send + Sync {
    /// Returns every address found for `domain`, in the order the upstream gave them.
    async fn lookup(&self, domain: &str) -> Result<Vec<IpAddr>, DomainError>;
}
