mod cache;
mod config;
mod logging;

pub use cache::seed_cache;
pub use config::{load_config, log_config_source};
pub use logging::init_logging;
