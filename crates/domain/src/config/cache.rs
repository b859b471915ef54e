use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// TTL in seconds for answers and for upstream results written back to the cache.
    #[serde(default = "default_entry_ttl")]
    pub entry_ttl: u32,

    #[serde(default = "default_compaction_interval_secs")]
    pub compaction_interval_secs: u64,

    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            entry_ttl: default_entry_ttl(),
            compaction_interval_secs: default_compaction_interval_secs(),
            max_entries: default_max_entries(),
        }
    }
}

fn default_entry_ttl() -> u32 {
    3600
}

fn default_compaction_interval_secs() -> u64 {
    300
}

fn default_max_entries() -> usize {
    200_000
}
