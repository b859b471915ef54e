use async_trait::async_trait;
use sentry_dns_application::ports::UpstreamResolver;
use sentry_dns_domain::DomainError;
use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

#[derive(Clone, Default)]
pub struct MockUpstreamResolver {
    responses: Arc<RwLock<HashMap<String, Vec<IpAddr>>>>,
    delays: Arc<RwLock<HashMap<String, Duration>>>,
    calls: Arc<AtomicUsize>,
    should_fail: Arc<RwLock<bool>>,
}

impl MockUpstreamResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_response(&self, domain: &str, addresses: &[&str]) {
        let parsed = addresses.iter().map(|a| a.parse().unwrap()).collect();
        self.responses
            .write()
            .await
            .insert(domain.to_string(), parsed);
    }

    pub async fn set_delay(&self, domain: &str, delay: Duration) {
        self.delays.write().await.insert(domain.to_string(), delay);
    }

    pub async fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.write().await = should_fail;
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UpstreamResolver for MockUpstreamResolver {
    async fn lookup(&self, domain: &str) -> Result<Vec<IpAddr>, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let delay = self.delays.read().await.get(domain).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if *self.should_fail.read().await {
            return Err(DomainError::QueryTimeout);
        }

        self.responses
            .read()
            .await
            .get(domain)
            .cloned()
            .ok_or(DomainError::NxDomain)
    }
}
