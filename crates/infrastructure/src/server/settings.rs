use sentry_dns_domain::{Config, DomainError};
use std::net::SocketAddr;
use std::time::Duration;

/// Runtime parameters of the UDP pipeline, resolved from [`Config`].
#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub bind_addr: SocketAddr,
    pub workers: usize,
    pub event_queue_size: usize,
    pub event_queue_timeout: Duration,
    pub worker_acquire_timeout: Duration,
    pub shutdown_grace: Duration,
    /// Size of the receive buffer; datagrams longer than this are cut short.
    pub recv_buffer_size: usize,
    /// Limit handed to the question walk of the parser.
    pub parse_size_limit: usize,
}

impl ServerSettings {
    pub fn from_config(config: &Config) -> Result<Self, DomainError> {
        let bind_addr = config
            .bind_socket_addr()
            .map_err(|e| DomainError::ConfigError(e.to_string()))?;

        Ok(Self {
            bind_addr,
            workers: config.server.workers.max(1),
            event_queue_size: config.server.event_queue_size.max(1),
            event_queue_timeout: Duration::from_millis(config.server.event_queue_timeout_ms),
            worker_acquire_timeout: Duration::from_millis(config.server.worker_acquire_timeout_ms),
            shutdown_grace: Duration::from_millis(config.server.shutdown_grace_ms),
            recv_buffer_size: config.udp.pkg_limit_edns0,
            parse_size_limit: config.udp.pkg_limit_rfc1035,
        })
    }
}
