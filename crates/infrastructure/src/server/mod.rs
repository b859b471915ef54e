mod metrics;
mod settings;
mod socket;
mod udp_server;

pub use metrics::{PipelineMetrics, PipelineStats};
pub use settings::ServerSettings;
pub use udp_server::{ServerState, UdpDnsServer};
