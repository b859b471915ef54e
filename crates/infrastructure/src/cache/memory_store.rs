use async_trait::async_trait;
use compact_str::CompactString;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use rustc_hash::FxBuildHasher;
use sentry_dns_application::ports::{CacheCompactionOutcome, CacheMaintenancePort, CacheStore};
use sentry_dns_domain::DomainError;
use std::time::{Duration, Instant};
use tracing::debug;

type FieldKey = (CompactString, CompactString);

struct HashField {
    value: CompactString,
    expires_at: Option<Instant>,
}

impl HashField {
    fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|at| now >= at)
    }
}

/// Process-local stand-in for an external key-value store.
///
/// Sets and hashes live in separate sharded maps keyed by `(key, member)`
/// and `(key, field)`. Hash fields may carry an expiry; an expired field
/// reads as absent and is removed on the access that notices it.
///
/// `max_entries` bounds the hash fields softly: concurrent inserts of new
/// fields can each pass the capacity check, so the map may briefly hold a
/// few more fields than the bound. Fields without an expiry (seeded known
/// hosts) are never evicted to make room.
pub struct InMemoryCacheStore {
    sets: DashMap<FieldKey, (), FxBuildHasher>,
    hashes: DashMap<FieldKey, HashField, FxBuildHasher>,
    max_entries: usize,
}

impl InMemoryCacheStore {
    pub fn new(max_entries: usize) -> Self {
        Self {
            sets: DashMap::with_hasher(FxBuildHasher),
            hashes: DashMap::with_capacity_and_hasher(max_entries.min(65536), FxBuildHasher),
            max_entries: max_entries.max(1),
        }
    }

    /// Number of stored hash fields, expired ones included until purged.
    pub fn len(&self) -> usize {
        self.hashes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hashes.is_empty()
    }

    pub fn set_len(&self) -> usize {
        self.sets.len()
    }

    /// Drops every expired hash field and returns how many were removed.
    pub fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let before = self.hashes.len();
        self.hashes.retain(|_, field| !field.is_expired(now));
        before.saturating_sub(self.hashes.len())
    }

    /// Frees a slot for a new field. Expired fields go first, then any field
    /// carrying an expiry. Permanent fields are never evicted; returns
    /// `false` when nothing could be freed.
    fn make_room(&self) -> bool {
        if self.hashes.len() < self.max_entries {
            return true;
        }

        let now = Instant::now();
        let expired: Vec<FieldKey> = self
            .hashes
            .iter()
            .filter(|e| e.value().is_expired(now))
            .map(|e| e.key().clone())
            .take(64)
            .collect();
        for key in &expired {
            self.hashes.remove_if(key, |_, field| field.is_expired(now));
        }
        if self.hashes.len() < self.max_entries {
            return true;
        }

        let victim = self
            .hashes
            .iter()
            .find(|e| e.value().expires_at.is_some())
            .map(|e| e.key().clone());
        match victim {
            Some(key) => {
                debug!(key = %key.0, field = %key.1, "Cache full, evicting entry");
                self.hashes
                    .remove_if(&key, |_, field| field.expires_at.is_some());
                true
            }
            None => false,
        }
    }
}

fn field_key(key: &str, field: &str) -> FieldKey {
    (CompactString::from(key), CompactString::from(field))
}

#[async_trait]
impl CacheStore for InMemoryCacheStore {
    async fn set_add(&self, key: &str, members: Vec<String>) -> Result<usize, DomainError> {
        let added = members
            .into_iter()
            .filter(|member| {
                self.sets
                    .insert(field_key(key, member), ())
                    .is_none()
            })
            .count();
        Ok(added)
    }

    async fn set_is_member(&self, key: &str, member: &str) -> Result<bool, DomainError> {
        Ok(self.sets.contains_key(&field_key(key, member)))
    }

    async fn hash_get(&self, key: &str, field: &str) -> Result<Option<String>, DomainError> {
        match self.hashes.entry(field_key(key, field)) {
            Entry::Vacant(_) => Ok(None),
            Entry::Occupied(e) => {
                if e.get().is_expired(Instant::now()) {
                    e.remove();
                    Ok(None)
                } else {
                    Ok(Some(e.get().value.to_string()))
                }
            }
        }
    }

    async fn hash_set(&self, key: &str, field: &str, value: &str) -> Result<(), DomainError> {
        let fkey = field_key(key, field);
        let entry = HashField {
            value: CompactString::from(value),
            expires_at: None,
        };

        if let Some(mut existing) = self.hashes.get_mut(&fkey) {
            *existing = entry;
            return Ok(());
        }

        if !self.make_room() {
            debug!(
                key,
                field,
                max_entries = self.max_entries,
                "Cache full of permanent entries, field not stored"
            );
            return Ok(());
        }
        self.hashes.insert(fkey, entry);
        Ok(())
    }

    async fn hash_expire_field(
        &self,
        key: &str,
        field: &str,
        ttl: Duration,
    ) -> Result<bool, DomainError> {
        match self.hashes.get_mut(&field_key(key, field)) {
            Some(mut entry) => {
                entry.expires_at = Some(Instant::now() + ttl);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[async_trait]
impl CacheMaintenancePort for InMemoryCacheStore {
    async fn run_compaction_cycle(&self) -> Result<CacheCompactionOutcome, DomainError> {
        let entries_removed = self.purge_expired();
        Ok(CacheCompactionOutcome {
            entries_removed,
            cache_size: self.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_full_store_evicts_ttl_field_without_blocking() {
        let store = InMemoryCacheStore::new(2);
        for field in ["a", "b"] {
            store.hash_set("h", field, "1").await.unwrap();
            store
                .hash_expire_field("h", field, Duration::from_secs(3600))
                .await
                .unwrap();
        }

        tokio::time::timeout(Duration::from_secs(1), store.hash_set("h", "c", "3"))
            .await
            .expect("hash_set on a full store must not block")
            .unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.hash_get("h", "c").await.unwrap().as_deref(), Some("3"));
    }

    #[tokio::test]
    async fn test_permanent_fields_are_never_evicted() {
        let store = InMemoryCacheStore::new(2);
        store.hash_set("h", "a", "1").await.unwrap();
        store.hash_set("h", "b", "2").await.unwrap();

        tokio::time::timeout(Duration::from_secs(1), store.hash_set("h", "c", "3"))
            .await
            .expect("hash_set on a full store must not block")
            .unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.hash_get("h", "a").await.unwrap().as_deref(), Some("1"));
        assert_eq!(store.hash_get("h", "b").await.unwrap().as_deref(), Some("2"));
        assert_eq!(store.hash_get("h", "c").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_overwrite_does_not_evict() {
        let store = InMemoryCacheStore::new(2);
        store.hash_set("h", "a", "1").await.unwrap();
        store.hash_set("h", "b", "2").await.unwrap();
        store.hash_set("h", "a", "3").await.unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.hash_get("h", "a").await.unwrap().as_deref(), Some("3"));
        assert_eq!(store.hash_get("h", "b").await.unwrap().as_deref(), Some("2"));
    }
}
