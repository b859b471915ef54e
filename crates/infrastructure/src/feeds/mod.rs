//! Flat-file startup feeds.
//!
//! Both readers share the same rules: blank lines and `#` comments are
//! ignored, malformed lines are skipped with a warning, and a missing file
//! is an empty feed rather than an error.

mod blacklist_file;
mod known_hosts_file;

pub use blacklist_file::{parse_blacklist, FileBlacklistSource};
pub use known_hosts_file::{parse_known_hosts, FileKnownHostsSource};

use sentry_dns_domain::DomainError;
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;
use tracing::warn;

async fn read_feed(path: &Path, feed: &'static str) -> Result<Option<String>, DomainError> {
    match fs::read_to_string(path).await {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!(feed, path = %path.display(), "Feed file not found, loading nothing");
            Ok(None)
        }
        Err(e) => Err(DomainError::IoError(format!(
            "Failed to read {} feed {}: {}",
            feed,
            path.display(),
            e
        ))),
    }
}

fn is_ignored(line: &str) -> bool {
    line.is_empty() || line.starts_with('#')
}
