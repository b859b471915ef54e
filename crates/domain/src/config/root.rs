use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

use super::cache::CacheConfig;
use super::errors::ConfigError;
use super::feeds::FeedsConfig;
use super::logging::LoggingConfig;
use super::server::ServerConfig;
use super::udp::UdpConfig;
use super::upstream::{UpstreamConfig, UpstreamMode};
use crate::wire::{HEADER_SIZE, MAX_POINTER_OFFSET};

const LOCAL_CONFIG_PATH: &str = "sentry-dns.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/sentry-dns/config.toml";

/// Main configuration structure for Sentry DNS
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Listener and request pipeline
    #[serde(default)]
    pub server: ServerConfig,

    /// UDP packet size limits
    #[serde(default)]
    pub udp: UdpConfig,

    /// Known-host cache
    #[serde(default)]
    pub cache: CacheConfig,

    /// Fallback resolution
    #[serde(default)]
    pub upstream: UpstreamConfig,

    /// Blacklist and known-hosts files loaded at startup
    #[serde(default)]
    pub feeds: FeedsConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. sentry-dns.toml in current directory
    /// 3. /etc/sentry-dns/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new(LOCAL_CONFIG_PATH).exists() {
            Self::from_file(LOCAL_CONFIG_PATH)?
        } else if std::path::Path::new(SYSTEM_CONFIG_PATH).exists() {
            Self::from_file(SYSTEM_CONFIG_PATH)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead {
                path: path.to_string(),
                reason: e.to_string(),
            })?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(workers) = overrides.workers {
            self.server.workers = workers;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }
        if !self.server.protocol.eq_ignore_ascii_case("udp") {
            return Err(ConfigError::Validation(format!(
                "Unsupported protocol '{}', only udp is served",
                self.server.protocol
            )));
        }
        if self.server.workers == 0 {
            return Err(ConfigError::Validation(
                "Worker count must be at least 1".to_string(),
            ));
        }
        if self.server.event_queue_size == 0 {
            return Err(ConfigError::Validation(
                "Event queue size must be at least 1".to_string(),
            ));
        }
        if self.udp.pkg_limit_rfc1035 < HEADER_SIZE {
            return Err(ConfigError::Validation(format!(
                "pkg_limit_rfc1035 must be at least {} bytes",
                HEADER_SIZE
            )));
        }
        if self.udp.pkg_limit_edns0 < self.udp.pkg_limit_rfc1035 {
            return Err(ConfigError::Validation(
                "pkg_limit_edns0 cannot be smaller than pkg_limit_rfc1035".to_string(),
            ));
        }
        if self.udp.pkg_limit_edns0 > MAX_POINTER_OFFSET {
            return Err(ConfigError::Validation(format!(
                "pkg_limit_edns0 cannot exceed {} bytes",
                MAX_POINTER_OFFSET
            )));
        }
        if self.upstream.mode == UpstreamMode::Forward {
            self.upstream
                .forward_host
                .parse::<SocketAddr>()
                .map_err(|e| ConfigError::InvalidAddress {
                    addr: self.upstream.forward_host.clone(),
                    reason: e.to_string(),
                })?;
        }
        Ok(())
    }

    pub fn bind_socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let addr = format!("{}:{}", self.server.bind_address, self.server.port);
        addr.parse().map_err(|e: std::net::AddrParseError| ConfigError::InvalidAddress {
            reason: e.to_string(),
            addr,
        })
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        if std::path::Path::new(LOCAL_CONFIG_PATH).exists() {
            Some(LOCAL_CONFIG_PATH.to_string())
        } else if std::path::Path::new(SYSTEM_CONFIG_PATH).exists() {
            Some(SYSTEM_CONFIG_PATH.to_string())
        } else {
            None
        }
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub port: Option<u16>,
    pub bind_address: Option<String>,
    pub workers: Option<usize>,
    pub log_level: Option<String>,
}
