pub mod cache;
pub mod errors;
pub mod feeds;
pub mod logging;
pub mod root;
pub mod server;
pub mod udp;
pub mod upstream;

pub use cache::CacheConfig;
pub use errors::ConfigError;
pub use feeds::FeedsConfig;
pub use logging::{LogFormat, LoggingConfig};
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
pub use udp::UdpConfig;
pub use upstream::{UpstreamConfig, UpstreamMode};
