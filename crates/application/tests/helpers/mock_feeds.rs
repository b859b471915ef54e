use async_trait::async_trait;
use sentry_dns_application::ports::{BlacklistSource, KnownHost, KnownHostsSource};
use sentry_dns_domain::DomainError;

pub struct MockBlacklistSource {
    domains: Vec<String>,
}

impl MockBlacklistSource {
    pub fn new(domains: &[&str]) -> Self {
        Self {
            domains: domains.iter().map(|d| d.to_string()).collect(),
        }
    }
}

#[async_trait]
impl BlacklistSource for MockBlacklistSource {
    async fn load(&self) -> Result<Vec<String>, DomainError> {
        Ok(self.domains.clone())
    }
}

pub struct MockKnownHostsSource {
    hosts: Vec<KnownHost>,
}

impl MockKnownHostsSource {
    pub fn new(hosts: &[(&str, &str)]) -> Self {
        Self {
            hosts: hosts
                .iter()
                .map(|(domain, ip)| KnownHost::new(*domain, ip.parse().unwrap()))
                .collect(),
        }
    }
}

#[async_trait]
impl KnownHostsSource for MockKnownHostsSource {
    async fn load(&self) -> Result<Vec<KnownHost>, DomainError> {
        Ok(self.hosts.clone())
    }
}
