use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FeedsConfig {
    #[serde(default = "default_blacklist_path")]
    pub blacklist_path: String,

    #[serde(default = "default_known_hosts_path")]
    pub known_hosts_path: String,
}

impl Default for FeedsConfig {
    fn default() -> Self {
        Self {
            blacklist_path: default_blacklist_path(),
            known_hosts_path: default_known_hosts_path(),
        }
    }
}

fn default_blacklist_path() -> String {
    "blacklist".to_string()
}

fn default_known_hosts_path() -> String {
    "known_hosts".to_string()
}
