use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UdpConfig {
    /// Plain DNS-over-UDP payload limit; bounds the question walk and the response size.
    #[serde(default = "default_pkg_limit_rfc1035")]
    pub pkg_limit_rfc1035: usize,

    /// Receive buffer size, large enough for EDNS0 payloads.
    #[serde(default = "default_pkg_limit_edns0")]
    pub pkg_limit_edns0: usize,
}

impl Default for UdpConfig {
    fn default() -> Self {
        Self {
            pkg_limit_rfc1035: default_pkg_limit_rfc1035(),
            pkg_limit_edns0: default_pkg_limit_edns0(),
        }
    }
}

fn default_pkg_limit_rfc1035() -> usize {
    512
}

fn default_pkg_limit_edns0() -> usize {
    4096
}
