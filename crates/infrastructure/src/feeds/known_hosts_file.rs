use super::{is_ignored, read_feed};
use async_trait::async_trait;
use sentry_dns_application::ports::{KnownHost, KnownHostsSource};
use sentry_dns_domain::DomainError;
use std::net::Ipv4Addr;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{debug, warn};

/// Reads `domain address` pairs, one per line.
pub struct FileKnownHostsSource {
    path: PathBuf,
}

impl FileKnownHostsSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl KnownHostsSource for FileKnownHostsSource {
    async fn load(&self) -> Result<Vec<KnownHost>, DomainError> {
        let Some(content) = read_feed(&self.path, "known_hosts").await? else {
            return Ok(Vec::new());
        };
        let hosts = parse_known_hosts(&content);
        debug!(path = %self.path.display(), count = hosts.len(), "Known hosts feed read");
        Ok(hosts)
    }
}

pub fn parse_known_hosts(content: &str) -> Vec<KnownHost> {
    let mut hosts = Vec::new();

    for (line_num, line) in content.lines().enumerate() {
        let line = line.trim();
        if is_ignored(line) {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != 2 {
            warn!(line = line_num + 1, content = %line, "Invalid known_hosts line, expected 'domain address'");
            continue;
        }

        match Ipv4Addr::from_str(fields[1]) {
            Ok(address) => hosts.push(KnownHost::new(fields[0], address)),
            Err(_) => {
                warn!(line = line_num + 1, address = fields[1], "Invalid IPv4 address in known_hosts");
            }
        }
    }

    hosts
}
