use super::{is_ignored, read_feed};
use async_trait::async_trait;
use sentry_dns_application::ports::BlacklistSource;
use sentry_dns_domain::DomainError;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Reads one domain per line.
pub struct FileBlacklistSource {
    path: PathBuf,
}

impl FileBlacklistSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl BlacklistSource for FileBlacklistSource {
    async fn load(&self) -> Result<Vec<String>, DomainError> {
        let Some(content) = read_feed(&self.path, "blacklist").await? else {
            return Ok(Vec::new());
        };
        let domains = parse_blacklist(&content);
        debug!(path = %self.path.display(), count = domains.len(), "Blacklist feed read");
        Ok(domains)
    }
}

pub fn parse_blacklist(content: &str) -> Vec<String> {
    content
        .lines()
        .enumerate()
        .filter_map(|(line_num, line)| {
            let line = line.trim();
            if is_ignored(line) {
                return None;
            }
            if line.split_whitespace().nth(1).is_some() {
                warn!(line = line_num + 1, content = %line, "Skipping malformed blacklist line");
                return None;
            }
            Some(line.to_string())
        })
        .collect()
}
