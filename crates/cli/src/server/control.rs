use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

/// Operator command read from standard input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Stop,
    Empty,
    Unknown(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        match line.trim() {
            "" => Self::Empty,
            cmd if cmd.eq_ignore_ascii_case("stop") => Self::Stop,
            other => Self::Unknown(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownReason {
    StopCommand,
    Interrupt,
    Terminate,
}

impl ShutdownReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::StopCommand => "stop command",
            Self::Interrupt => "SIGINT",
            Self::Terminate => "SIGTERM",
        }
    }
}

/// Resolves on the first of: a `stop` line on stdin, Ctrl-C, or SIGTERM.
pub async fn wait_for_shutdown() -> ShutdownReason {
    tokio::select! {
        _ = read_commands() => ShutdownReason::StopCommand,
        _ = interrupt() => ShutdownReason::Interrupt,
        _ = terminate() => ShutdownReason::Terminate,
    }
}

/// Returns on `stop`. Closed or unreadable stdin leaves shutdown to signals.
async fn read_commands() {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        match lines.next_line().await {
            Ok(Some(line)) => match Command::parse(&line) {
                Command::Stop => return,
                Command::Empty => {}
                Command::Unknown(cmd) => info!(command = %cmd, "Unknown command"),
            },
            Ok(None) => break,
            Err(e) => {
                warn!(error = %e, "Failed to read from stdin");
                break;
            }
        }
    }

    std::future::pending::<()>().await
}

async fn interrupt() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for SIGINT");
        std::future::pending::<()>().await
    }
}

#[cfg(unix)]
async fn terminate() {
    use tokio::signal::unix::{signal, SignalKind};

    match signal(SignalKind::terminate()) {
        Ok(mut sigterm) => {
            sigterm.recv().await;
        }
        Err(e) => {
            warn!(error = %e, "Failed to listen for SIGTERM");
            std::future::pending::<()>().await
        }
    }
}

#[cfg(not(unix))]
async fn terminate() {
    std::future::pending::<()>().await
}
