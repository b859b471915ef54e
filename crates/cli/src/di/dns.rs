use crate::bootstrap;
use sentry_dns_application::ports::{CacheMaintenancePort, UpstreamResolver};
use sentry_dns_application::use_cases::{
    HandleDnsRequestUseCase, ResolveQuestionsUseCase, ResponseAssembler,
};
use sentry_dns_domain::config::UpstreamMode;
use sentry_dns_domain::Config;
use sentry_dns_infrastructure::cache::InMemoryCacheStore;
use sentry_dns_infrastructure::upstream::{ForwardingResolver, SystemResolver};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

pub struct DnsServices {
    pub handler: Arc<HandleDnsRequestUseCase>,
    pub cache_maintenance: Arc<dyn CacheMaintenancePort>,
}

impl DnsServices {
    pub async fn new(config: &Config) -> anyhow::Result<Self> {
        info!("Initializing DNS services");

        let store = Arc::new(InMemoryCacheStore::new(config.cache.max_entries));
        let seeded = bootstrap::seed_cache(store.clone(), &config.feeds).await?;
        info!(
            blacklisted = seeded.blacklisted,
            known_hosts = seeded.known_hosts,
            "Cache seeded"
        );

        let upstream = Self::build_upstream(config)?;

        let resolver = ResolveQuestionsUseCase::new(
            store.clone(),
            upstream,
            Duration::from_secs(u64::from(config.cache.entry_ttl)),
        );
        let assembler = ResponseAssembler::new(config.cache.entry_ttl, config.udp.pkg_limit_rfc1035)
            .with_question_echo(config.server.echo_questions_without_answers);

        let handler = Arc::new(HandleDnsRequestUseCase::new(resolver, assembler));

        info!("DNS services initialized successfully");

        Ok(Self {
            handler,
            cache_maintenance: store,
        })
    }

    fn build_upstream(config: &Config) -> anyhow::Result<Arc<dyn UpstreamResolver>> {
        let timeout = Duration::from_millis(config.upstream.timeout_ms);

        let upstream: Arc<dyn UpstreamResolver> = match config.upstream.mode {
            UpstreamMode::System => Arc::new(SystemResolver::new(timeout)),
            UpstreamMode::Forward => {
                let server: SocketAddr = config.upstream.forward_host.parse()?;
                Arc::new(ForwardingResolver::new(server, timeout))
            }
        };

        info!(
            mode = config.upstream.mode.as_str(),
            forward_host = %config.upstream.forward_host,
            timeout_ms = config.upstream.timeout_ms,
            "Upstream resolver configured"
        );

        Ok(upstream)
    }
}
