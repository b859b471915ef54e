use async_trait::async_trait;
use sentry_dns_application::ports::{CacheStore, BLACKLIST_SET, KNOWN_HOSTS_HASH};
use sentry_dns_domain::DomainError;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

#[derive(Clone, Default)]
pub struct MockCacheStore {
    sets: Arc<RwLock<HashMap<String, HashSet<String>>>>,
    hashes: Arc<RwLock<HashMap<String, HashMap<String, String>>>>,
    expiries: Arc<RwLock<HashMap<(String, String), Duration>>>,
    should_fail: Arc<RwLock<bool>>,
}

impl MockCacheStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn blacklist(&self, domain: &str) {
        self.sets
            .write()
            .await
            .entry(BLACKLIST_SET.to_string())
            .or_default()
            .insert(domain.to_string());
    }

    pub async fn cache_host(&self, domain: &str, value: &str) {
        self.hashes
            .write()
            .await
            .entry(KNOWN_HOSTS_HASH.to_string())
            .or_default()
            .insert(domain.to_string(), value.to_string());
    }

    pub async fn cached_host(&self, domain: &str) -> Option<String> {
        self.hashes
            .read()
            .await
            .get(KNOWN_HOSTS_HASH)
            .and_then(|h| h.get(domain).cloned())
    }

    pub async fn expiry_of(&self, domain: &str) -> Option<Duration> {
        self.expiries
            .read()
            .await
            .get(&(KNOWN_HOSTS_HASH.to_string(), domain.to_string()))
            .copied()
    }

    pub async fn blacklist_len(&self) -> usize {
        self.sets
            .read()
            .await
            .get(BLACKLIST_SET)
            .map_or(0, HashSet::len)
    }

    pub async fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.write().await = should_fail;
    }

    async fn check_failure(&self) -> Result<(), DomainError> {
        if *self.should_fail.read().await {
            return Err(DomainError::CacheStore("Mock store failed".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl CacheStore for MockCacheStore {
    async fn set_add(&self, key: &str, members: Vec<String>) -> Result<usize, DomainError> {
        self.check_failure().await?;
        let mut sets = self.sets.write().await;
        let set = sets.entry(key.to_string()).or_default();
        Ok(members.into_iter().filter(|m| set.insert(m.clone())).count())
    }

    async fn set_is_member(&self, key: &str, member: &str) -> Result<bool, DomainError> {
        self.check_failure().await?;
        Ok(self
            .sets
            .read()
            .await
            .get(key)
            .is_some_and(|set| set.contains(member)))
    }

    async fn hash_get(&self, key: &str, field: &str) -> Result<Option<String>, DomainError> {
        self.check_failure().await?;
        Ok(self
            .hashes
            .read()
            .await
            .get(key)
            .and_then(|h| h.get(field).cloned()))
    }

    async fn hash_set(&self, key: &str, field: &str, value: &str) -> Result<(), DomainError> {
        self.check_failure().await?;
        self.hashes
            .write()
            .await
            .entry(key.to_string())
            .or_default()
            .insert(field.to_string(), value.to_string());
        self.expiries
            .write()
            .await
            .remove(&(key.to_string(), field.to_string()));
        Ok(())
    }

    async fn hash_expire_field(
        &self,
        key: &str,
        field: &str,
        ttl: Duration,
    ) -> Result<bool, DomainError> {
        self.check_failure().await?;
        let exists = self
            .hashes
            .read()
            .await
            .get(key)
            .is_some_and(|h| h.contains_key(field));
        if exists {
            self.expiries
                .write()
                .await
                .insert((key.to_string(), field.to_string()), ttl);
        }
        Ok(exists)
    }
}
