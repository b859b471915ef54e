use crate::ports::{CacheStore, UpstreamResolver, BLACKLIST_SET, KNOWN_HOSTS_HASH};
use futures::future::join_all;
use sentry_dns_domain::{normalize_domain, Question, RecordType};
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Resolves each question of a request to at most one IPv4 address.
///
/// Per question: blacklist first, then the known-host hash, then the
/// upstream resolver with a write-back into the hash. Store and upstream
/// failures only cost that question its answer.
#[derive(Clone)]
pub struct ResolveQuestionsUseCase {
    store: Arc<dyn CacheStore>,
    upstream: Arc<dyn UpstreamResolver>,
    entry_ttl: Duration,
}

impl ResolveQuestionsUseCase {
    pub fn new(
        store: Arc<dyn CacheStore>,
        upstream: Arc<dyn UpstreamResolver>,
        entry_ttl: Duration,
    ) -> Self {
        Self {
            store,
            upstream,
            entry_ttl,
        }
    }

    /// Runs one task per question and returns the slots in question order.
    pub async fn execute(&self, questions: &[Question]) -> Vec<Option<Ipv4Addr>> {
        let handles = questions.iter().cloned().map(|question| {
            let engine = self.clone();
            tokio::spawn(async move { engine.resolve_one(&question).await })
        });

        join_all(handles)
            .await
            .into_iter()
            .map(|joined| {
                joined.unwrap_or_else(|e| {
                    warn!(error = %e, "Question resolution task failed");
                    None
                })
            })
            .collect()
    }

    async fn resolve_one(&self, question: &Question) -> Option<Ipv4Addr> {
        if question.record_type != RecordType::A {
            debug!(
                domain = %question.name,
                record_type = %question.record_type,
                "Only A questions are answered"
            );
            return None;
        }

        let domain = normalize_domain(question.name.as_str());

        match self.store.set_is_member(BLACKLIST_SET, &domain).await {
            Ok(true) => {
                debug!(domain = %domain, "Blacklisted, no answer");
                return None;
            }
            Ok(false) => {}
            Err(e) => {
                warn!(error = %e, domain = %domain, "Blacklist lookup failed");
                return None;
            }
        }

        match self.store.hash_get(KNOWN_HOSTS_HASH, &domain).await {
            Ok(Some(value)) => match value.parse::<Ipv4Addr>() {
                Ok(address) => {
                    debug!(domain = %domain, address = %address, "Cache hit");
                    return Some(address);
                }
                Err(_) => {
                    debug!(domain = %domain, value = %value, "Cached value is not an IPv4 address");
                }
            },
            Ok(None) => {}
            Err(e) => {
                warn!(error = %e, domain = %domain, "Cache lookup failed");
                return None;
            }
        }

        let address = match self.upstream.lookup(&domain).await {
            Ok(addresses) => first_ipv4(&addresses)?,
            Err(e) => {
                debug!(error = %e, domain = %domain, "Upstream resolution failed");
                return None;
            }
        };

        self.write_back(&domain, address).await;
        Some(address)
    }

    async fn write_back(&self, domain: &str, address: Ipv4Addr) {
        if let Err(e) = self
            .store
            .hash_set(KNOWN_HOSTS_HASH, domain, &address.to_string())
            .await
        {
            warn!(error = %e, domain = %domain, "Failed to cache upstream answer");
            return;
        }

        if let Err(e) = self
            .store
            .hash_expire_field(KNOWN_HOSTS_HASH, domain, self.entry_ttl)
            .await
        {
            warn!(error = %e, domain = %domain, "Failed to set cache entry TTL");
        }
    }
}

fn first_ipv4(addresses: &[IpAddr]) -> Option<Ipv4Addr> {
    addresses.iter().find_map(|addr| match addr {
        IpAddr::V4(v4) => Some(*v4),
        IpAddr::V6(_) => None,
    })
}
