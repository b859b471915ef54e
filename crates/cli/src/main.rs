use clap::Parser;
use sentry_dns_domain::CliOverrides;
use sentry_dns_infrastructure::server::{ServerSettings, UdpDnsServer};
use sentry_dns_jobs::{CacheCompactionJob, JobRunner};
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "sentry-dns")]
#[command(version)]
#[command(about = "Sentry DNS - caching UDP DNS resolver with a domain blacklist")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DNS server port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Maximum number of requests handled concurrently
    #[arg(short = 'w', long)]
    workers: Option<usize>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        port: cli.port,
        bind_address: cli.bind.clone(),
        workers: cli.workers,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config.logging);

    info!("Starting Sentry DNS v{}", env!("CARGO_PKG_VERSION"));
    bootstrap::log_config_source(cli.config.as_deref());

    let dns_services = di::DnsServices::new(&config).await?;

    let shutdown = CancellationToken::new();
    let job_handles = JobRunner::new()
        .with_cache_compaction(
            CacheCompactionJob::new(dns_services.cache_maintenance.clone())
                .with_interval(config.cache.compaction_interval_secs),
        )
        .with_shutdown_token(shutdown.clone())
        .start();

    let settings = ServerSettings::from_config(&config)?;
    let dns_server = UdpDnsServer::new(settings, dns_services.handler.clone());

    if let Err(e) = dns_server.start().await {
        error!(error = %e, "Failed to start DNS server");
        shutdown.cancel();
        return Err(e.into());
    }

    let reason = server::wait_for_shutdown().await;
    info!(reason = reason.as_str(), "Shutdown requested");

    dns_server.stop().await;

    shutdown.cancel();
    for handle in job_handles {
        if let Err(e) = handle.await {
            warn!(error = %e, "Background job ended abnormally");
        }
    }

    info!("Server shutdown complete");
    Ok(())
}
