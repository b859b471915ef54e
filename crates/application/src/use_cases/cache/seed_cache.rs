use crate::ports::{
    BlacklistSource, CacheStore, KnownHostsSource, BLACKLIST_SET, KNOWN_HOSTS_HASH,
};
use sentry_dns_domain::{normalize_domain, DomainError};
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SeedOutcome {
    pub blacklisted: usize,
    pub known_hosts: usize,
}

/// Loads the startup feeds into the cache store.
pub struct SeedCacheUseCase {
    store: Arc<dyn CacheStore>,
    blacklist: Arc<dyn BlacklistSource>,
    known_hosts: Arc<dyn KnownHostsSource>,
}

impl SeedCacheUseCase {
    pub fn new(
        store: Arc<dyn CacheStore>,
        blacklist: Arc<dyn BlacklistSource>,
        known_hosts: Arc<dyn KnownHostsSource>,
    ) -> Self {
        Self {
            store,
            blacklist,
            known_hosts,
        }
    }

    pub async fn execute(&self) -> Result<SeedOutcome, DomainError> {
        let domains: Vec<String> = self
            .blacklist
            .load()
            .await?
            .iter()
            .map(|d| normalize_domain(d))
            .collect();
        let blacklisted = self.store.set_add(BLACKLIST_SET, domains).await?;

        let hosts = self.known_hosts.load().await?;
        for host in &hosts {
            self.store
                .hash_set(
                    KNOWN_HOSTS_HASH,
                    &normalize_domain(&host.domain),
                    &host.address.to_string(),
                )
                .await?;
        }

        info!(
            blacklisted,
            known_hosts = hosts.len(),
            "Cache seeded from feeds"
        );

        Ok(SeedOutcome {
            blacklisted,
            known_hosts: hosts.len(),
        })
    }
}
