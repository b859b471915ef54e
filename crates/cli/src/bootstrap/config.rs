use sentry_dns_domain::{CliOverrides, Config};
use tracing::info;

pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(path, overrides)?;
    config.validate()?;
    Ok(config)
}

/// Logs which file `load_config` read from.
pub fn log_config_source(path: Option<&str>) {
    match path.map(str::to_string).or_else(Config::get_config_path) {
        Some(source) => info!(path = %source, "Configuration loaded"),
        None => info!("No configuration file found, using defaults"),
    }
}
