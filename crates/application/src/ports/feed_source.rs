use async_trait::async_trait;
use sentry_dns_domain::DomainError;
use std::net::Ipv4Addr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnownHost {
    pub domain: String,
    pub address: Ipv4Addr,
}

impl KnownHost {
    pub fn new(domain: impl Into<String>, address: Ipv4Addr) -> Self {
        Self {
            domain: domain.into(),
            address,
        }
    }
}

/// Producer of blacklisted domains, read once at startup.
#[async_trait]
pub trait BlacklistSource: Send + Sync {
    async fn load(&self) -> Result<Vec<String>, DomainError>;
}

/// Producer of static domain to address pairs, read once at startup.
#[async_trait]
pub trait KnownHostsSource: Send + Sync {
    async fn load(&self) -> Result<Vec<KnownHost>, DomainError>;
}
