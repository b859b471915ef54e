use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_protocol")]
    pub protocol: String,

    /// Maximum number of requests handled concurrently.
    #[serde(default = "default_workers")]
    pub workers: usize,

    #[serde(default = "default_event_queue_size")]
    pub event_queue_size: usize,

    #[serde(default = "default_event_queue_timeout_ms")]
    pub event_queue_timeout_ms: u64,

    #[serde(default = "default_worker_acquire_timeout_ms")]
    pub worker_acquire_timeout_ms: u64,

    /// How long `stop` waits for in-flight requests before giving up on them.
    #[serde(default = "default_shutdown_grace_ms")]
    pub shutdown_grace_ms: u64,

    /// Echo the question section on responses that carry no answers.
    #[serde(default)]
    pub echo_questions_without_answers: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            port: default_port(),
            protocol: default_protocol(),
            workers: default_workers(),
            event_queue_size: default_event_queue_size(),
            event_queue_timeout_ms: default_event_queue_timeout_ms(),
            worker_acquire_timeout_ms: default_worker_acquire_timeout_ms(),
            shutdown_grace_ms: default_shutdown_grace_ms(),
            echo_questions_without_answers: false,
        }
    }
}

fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    53
}

fn default_protocol() -> String {
    "udp".to_string()
}

fn default_workers() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(4)
        * 2
}

fn default_event_queue_size() -> usize {
    1000
}

fn default_event_queue_timeout_ms() -> u64 {
    500
}

fn default_worker_acquire_timeout_ms() -> u64 {
    500
}

fn default_shutdown_grace_ms() -> u64 {
    2000
}
