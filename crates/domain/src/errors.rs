use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("Cache store error: {0}")]
    CacheStore(String),

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Domain not found (NXDOMAIN)")]
    NxDomain,

    #[error("Query timeout")]
    QueryTimeout,

    #[error("Transport timeout connecting to {server}")]
    TransportTimeout { server: String },

    #[error("Failed to bind {addr}: {reason}")]
    Bind { addr: String, reason: String },

    #[error("Server is already running")]
    ServerAlreadyRunning,

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
