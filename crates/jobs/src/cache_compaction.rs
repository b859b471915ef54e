use sentry_dns_application::ports::CacheMaintenancePort;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

const DEFAULT_COMPACTION_INTERVAL_SECS: u64 = 300;

/// Periodically drops expired known-host entries from the cache store.
pub struct CacheCompactionJob {
    maintenance: Arc<dyn CacheMaintenancePort>,
    interval_secs: u64,
    shutdown: CancellationToken,
}

impl CacheCompactionJob {
    pub fn new(maintenance: Arc<dyn CacheMaintenancePort>) -> Self {
        Self {
            maintenance,
            interval_secs: DEFAULT_COMPACTION_INTERVAL_SECS,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, secs: u64) -> Self {
        self.interval_secs = secs.max(1);
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn start(self: Arc<Self>) {
        info!(
            interval_secs = self.interval_secs,
            "Starting cache compaction job"
        );

        let mut interval = tokio::time::interval(Duration::from_secs(self.interval_secs));
        loop {
            tokio::select! {
                _ = self.shutdown.cancelled() => {
                    info!("CacheCompactionJob: shutting down");
                    break;
                }
                _ = interval.tick() => {
                    match self.maintenance.run_compaction_cycle().await {
                        Ok(outcome) => {
                            if outcome.entries_removed > 0 {
                                info!(
                                    entries_removed = outcome.entries_removed,
                                    cache_size = outcome.cache_size,
                                    "Cache compaction cycle completed"
                                );
                            } else {
                                debug!(cache_size = outcome.cache_size, "Nothing to compact");
                            }
                        }
                        Err(e) => {
                            error!(error = %e, "Cache compaction cycle failed");
                        }
                    }
                }
            }
        }
    }
}
