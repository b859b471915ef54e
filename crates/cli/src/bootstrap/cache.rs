use sentry_dns_application::ports::CacheStore;
use sentry_dns_application::use_cases::{SeedCacheUseCase, SeedOutcome};
use sentry_dns_domain::config::FeedsConfig;
use sentry_dns_infrastructure::feeds::{FileBlacklistSource, FileKnownHostsSource};
use std::sync::Arc;
use tracing::{error, info};

pub async fn seed_cache(
    store: Arc<dyn CacheStore>,
    feeds: &FeedsConfig,
) -> anyhow::Result<SeedOutcome> {
    info!(
        blacklist = %feeds.blacklist_path,
        known_hosts = %feeds.known_hosts_path,
        "Loading startup feeds"
    );

    let seed = SeedCacheUseCase::new(
        store,
        Arc::new(FileBlacklistSource::new(&feeds.blacklist_path)),
        Arc::new(FileKnownHostsSource::new(&feeds.known_hosts_path)),
    );

    seed.execute().await.map_err(|e| {
        error!("Failed to load startup feeds: {}", e);
        anyhow::anyhow!(e)
    })
}
