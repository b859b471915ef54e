use async_trait::async_trait;
use sentry_dns_domain::DomainError;

/// Outcome of a cache compaction cycle.
#[derive(Debug, Default, Clone)]
pub struct CacheCompactionOutcome {
    pub entries_removed: usize,
    pub cache_size: usize,
}

/// Port for periodic cache maintenance.
#[async_trait]
pub trait CacheMaintenancePort: Send + Sync {
    /// Remove expired hash fields to reclaim memory.
    async fn run_compaction_cycle(&self) -> Result<CacheCompactionOutcome, DomainError>;
}
