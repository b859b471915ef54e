use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum UpstreamMode {
    /// Operating system resolver.
    #[default]
    System,

    /// Plain DNS over UDP to `forward_host`.
    Forward,
}

impl UpstreamMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::System => "system",
            Self::Forward => "forward",
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    #[serde(default)]
    pub mode: UpstreamMode,

    #[serde(default = "default_forward_host")]
    pub forward_host: String,

    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            mode: UpstreamMode::System,
            forward_host: default_forward_host(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

fn default_forward_host() -> String {
    "1.1.1.1:53".to_string()
}

fn default_timeout_ms() -> u64 {
    1000
}
