use async_trait::async_trait;
use sentry_dns_application::ports::UpstreamResolver;
use sentry_dns_domain::DomainError;
use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Upstream with a fixed table of answers and an optional per-lookup delay.
#[derive(Clone, Default)]
pub struct StaticUpstream {
    answers: Arc<HashMap<String, IpAddr>>,
    delay: Option<Duration>,
    calls: Arc<AtomicUsize>,
}

impl StaticUpstream {
    pub fn new(answers: &[(&str, &str)]) -> Self {
        Self {
            answers: Arc::new(
                answers
                    .iter()
                    .map(|(d, ip)| (d.to_string(), ip.parse().unwrap()))
                    .collect(),
            ),
            delay: None,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UpstreamResolver for StaticUpstream {
    async fn lookup(&self, domain: &str) -> Result<Vec<IpAddr>, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.answers
            .get(domain)
            .map(|ip| vec![*ip])
            .ok_or(DomainError::NxDomain)
    }
}
