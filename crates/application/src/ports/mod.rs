mod cache_maintenance_port;
mod cache_store;
mod feed_source;
mod upstream_resolver;

pub use cache_maintenance_port::{CacheCompactionOutcome, CacheMaintenancePort};
pub use cache_store::{CacheStore, BLACKLIST_SET, KNOWN_HOSTS_HASH};
pub use feed_source::{BlacklistSource, KnownHost, KnownHostsSource};
pub use upstream_resolver::UpstreamResolver;
