#![allow(dead_code)]

use async_trait::async_trait;
use sentry_dns_application::ports::{CacheCompactionOutcome, CacheMaintenancePort};
use sentry_dns_domain::DomainError;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

#[derive(Default)]
pub struct MockCacheMaintenancePort {
    compaction_calls: AtomicUsize,
    should_fail: AtomicBool,
}

impl MockCacheMaintenancePort {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn compaction_call_count(&self) -> usize {
        self.compaction_calls.load(Ordering::SeqCst)
    }

    pub fn set_should_fail(&self, fail: bool) {
        self.should_fail.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl CacheMaintenancePort for MockCacheMaintenancePort {
    async fn run_compaction_cycle(&self) -> Result<CacheCompactionOutcome, DomainError> {
        self.compaction_calls.fetch_add(1, Ordering::SeqCst);
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::CacheStore("compaction failed".to_string()));
        }
        Ok(CacheCompactionOutcome {
            entries_removed: 3,
            cache_size: 10,
        })
    }
}
