use async_trait::async_trait;
use sentry_dns_domain::DomainError;
use std::time::Duration;

/// Set holding every blacklisted domain.
pub const BLACKLIST_SET: &str = "blacklist";

/// Hash mapping a domain to the dotted IPv4 address it resolves to.
pub const KNOWN_HOSTS_HASH: &str = "known_hosts";

/// Associative store shared by every resolution task.
///
/// Implementations must make each operation atomic on its own; callers never
/// take additional locks around them.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Adds members to a set and returns how many were new.
    async fn set_add(&self, key: &str, members: Vec<String>) -> Result<usize, DomainError>;

    async fn set_is_member(&self, key: &str, member: &str) -> Result<bool, DomainError>;

    /// Returns `None` for a missing or expired field.
    async fn hash_get(&self, key: &str, field: &str) -> Result<Option<String>, DomainError>;

    /// Stores a field without expiry, replacing any previous value and TTL.
    async fn hash_set(&self, key: &str, field: &str, value: &str) -> Result<(), DomainError>;

    /// Sets a TTL on one field. Returns false when the field does not exist.
    async fn hash_expire_field(
        &self,
        key: &str,
        field: &str,
        ttl: Duration,
    ) -> Result<bool, DomainError>;
}
