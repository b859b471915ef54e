use super::metrics::{PipelineMetrics, PipelineStats};
use super::settings::ServerSettings;
use super::socket::bind_udp_socket;
use sentry_dns_application::use_cases::HandleDnsRequestUseCase;
use sentry_dns_domain::wire::parse_message;
use sentry_dns_domain::{DnsRequest, DomainError};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::UdpSocket;
use tokio::sync::mpsc::error::SendTimeoutError;
use tokio::sync::{mpsc, Mutex, Semaphore};
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;
use tracing::{debug, error, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerState {
    Stopped,
    Running,
    Stopping,
}

enum Lifecycle {
    Stopped,
    Running(RunningServer),
    Stopping,
}

struct RunningServer {
    local_addr: SocketAddr,
    shutdown: CancellationToken,
    /// Fired when the grace period runs out; abandons in-flight requests.
    abandon: CancellationToken,
    /// Dispatch and processing loops.
    pipeline: TaskTracker,
    /// One task per admitted request.
    requests: TaskTracker,
}

/// State shared by the pipeline loops and every request task. The socket
/// closes when the last holder drops, so `stop` only returns once every
/// task has either finished or been abandoned.
struct Pipeline {
    socket: UdpSocket,
    handler: Arc<HandleDnsRequestUseCase>,
    metrics: Arc<PipelineMetrics>,
    settings: ServerSettings,
    shutdown: CancellationToken,
    abandon: CancellationToken,
}

/// UDP DNS server: a dispatch loop feeding a bounded queue, and a processing
/// loop draining it under a worker limit.
///
/// ```text
/// Stopped --start--> Running --stop--> Stopping --> Stopped
/// ```
pub struct UdpDnsServer {
    settings: ServerSettings,
    handler: Arc<HandleDnsRequestUseCase>,
    metrics: Arc<PipelineMetrics>,
    lifecycle: Mutex<Lifecycle>,
}

impl UdpDnsServer {
    pub fn new(settings: ServerSettings, handler: Arc<HandleDnsRequestUseCase>) -> Self {
        Self {
            settings,
            handler,
            metrics: Arc::new(PipelineMetrics::default()),
            lifecycle: Mutex::new(Lifecycle::Stopped),
        }
    }

    pub async fn state(&self) -> ServerState {
        match *self.lifecycle.lock().await {
            Lifecycle::Stopped => ServerState::Stopped,
            Lifecycle::Running(_) => ServerState::Running,
            Lifecycle::Stopping => ServerState::Stopping,
        }
    }

    /// Address actually bound, once running. Useful when binding port 0.
    pub async fn local_addr(&self) -> Option<SocketAddr> {
        match &*self.lifecycle.lock().await {
            Lifecycle::Running(running) => Some(running.local_addr),
            _ => None,
        }
    }

    pub fn stats(&self) -> PipelineStats {
        self.metrics.snapshot()
    }

    /// Binds the socket and launches the dispatch and processing loops.
    pub async fn start(&self) -> Result<SocketAddr, DomainError> {
        let mut lifecycle = self.lifecycle.lock().await;
        if !matches!(*lifecycle, Lifecycle::Stopped) {
            return Err(DomainError::ServerAlreadyRunning);
        }

        let socket = bind_udp_socket(self.settings.bind_addr)?;
        let local_addr = socket.local_addr().map_err(|e| DomainError::Bind {
            addr: self.settings.bind_addr.to_string(),
            reason: e.to_string(),
        })?;

        let shutdown = CancellationToken::new();
        let abandon = CancellationToken::new();
        let pipeline_state = Arc::new(Pipeline {
            socket,
            handler: Arc::clone(&self.handler),
            metrics: Arc::clone(&self.metrics),
            settings: self.settings.clone(),
            shutdown: shutdown.clone(),
            abandon: abandon.clone(),
        });

        let (queue_tx, queue_rx) = mpsc::channel(self.settings.event_queue_size);
        let workers = Arc::new(Semaphore::new(self.settings.workers));
        let pipeline = TaskTracker::new();
        let requests = TaskTracker::new();

        pipeline.spawn(dispatch_loop(Arc::clone(&pipeline_state), queue_tx));
        pipeline.spawn(process_loop(
            pipeline_state,
            queue_rx,
            workers,
            requests.clone(),
        ));
        pipeline.close();

        info!(
            bind_address = %local_addr,
            workers = self.settings.workers,
            event_queue_size = self.settings.event_queue_size,
            "DNS server running"
        );

        *lifecycle = Lifecycle::Running(RunningServer {
            local_addr,
            shutdown,
            abandon,
            pipeline,
            requests,
        });
        Ok(local_addr)
    }

    /// Cancels both loops, waits for them, then gives in-flight requests up
    /// to the configured grace period. Requests still running after that are
    /// abandoned without a reply, and the socket is closed before returning.
    /// Calling it when not running is a no-op.
    pub async fn stop(&self) {
        let running = {
            let mut lifecycle = self.lifecycle.lock().await;
            match std::mem::replace(&mut *lifecycle, Lifecycle::Stopping) {
                Lifecycle::Running(running) => running,
                other => {
                    *lifecycle = other;
                    return;
                }
            }
        };

        info!(bind_address = %running.local_addr, "Stopping DNS server");

        running.shutdown.cancel();
        running.pipeline.wait().await;

        running.requests.close();
        if tokio::time::timeout(self.settings.shutdown_grace, running.requests.wait())
            .await
            .is_err()
        {
            warn!(
                in_flight = running.requests.len(),
                grace_ms = self.settings.shutdown_grace.as_millis() as u64,
                "Shutdown grace period elapsed, abandoning in-flight requests"
            );
            running.abandon.cancel();
            running.requests.wait().await;
        }

        *self.lifecycle.lock().await = Lifecycle::Stopped;

        let stats = self.stats();
        info!(
            received = stats.received,
            malformed = stats.malformed,
            queue_dropped = stats.queue_dropped,
            worker_dropped = stats.worker_dropped,
            responses_sent = stats.responses_sent,
            abandoned = stats.abandoned,
            "DNS server stopped"
        );
    }
}

async fn dispatch_loop(pipeline: Arc<Pipeline>, queue: mpsc::Sender<DnsRequest>) {
    let settings = &pipeline.settings;
    let metrics = &pipeline.metrics;
    let mut buf = vec![0u8; settings.recv_buffer_size];

    loop {
        let (len, client) = tokio::select! {
            biased;
            _ = pipeline.shutdown.cancelled() => break,
            received = pipeline.socket.recv_from(&mut buf) => match received {
                Ok(received) => received,
                Err(e) => {
                    warn!(error = %e, "UDP receive failed");
                    continue;
                }
            },
        };
        PipelineMetrics::incr(&metrics.received);

        let request = match parse_message(&buf[..len], settings.parse_size_limit) {
            Ok((header, questions)) => DnsRequest::new(client, header, questions),
            Err(e) => {
                PipelineMetrics::incr(&metrics.malformed);
                debug!(client = %client, bytes = len, error = %e, "Dropping malformed datagram");
                continue;
            }
        };

        tokio::select! {
            biased;
            _ = pipeline.shutdown.cancelled() => break,
            sent = queue.send_timeout(request, settings.event_queue_timeout) => match sent {
                Ok(()) => {}
                Err(SendTimeoutError::Timeout(dropped)) => {
                    PipelineMetrics::incr(&metrics.queue_dropped);
                    warn!(
                        client = %dropped.client,
                        id = dropped.header.id,
                        "Event queue is full, dropping request"
                    );
                }
                Err(SendTimeoutError::Closed(_)) => break,
            },
        }
    }

    debug!("Dispatch loop stopped");
}

async fn process_loop(
    pipeline: Arc<Pipeline>,
    mut queue: mpsc::Receiver<DnsRequest>,
    workers: Arc<Semaphore>,
    requests: TaskTracker,
) {
    let settings = &pipeline.settings;

    loop {
        let request = tokio::select! {
            biased;
            _ = pipeline.shutdown.cancelled() => break,
            next = queue.recv() => match next {
                Some(request) => request,
                None => break,
            },
        };

        let acquire = tokio::time::timeout(
            settings.worker_acquire_timeout,
            Arc::clone(&workers).acquire_owned(),
        );
        let permit = tokio::select! {
            biased;
            _ = pipeline.shutdown.cancelled() => break,
            acquired = acquire => match acquired {
                Ok(Ok(permit)) => permit,
                Ok(Err(_)) => break,
                Err(_) => {
                    PipelineMetrics::incr(&pipeline.metrics.worker_dropped);
                    warn!(
                        client = %request.client,
                        id = request.header.id,
                        workers = settings.workers,
                        "All workers busy, dropping request"
                    );
                    continue;
                }
            },
        };

        let pipeline = Arc::clone(&pipeline);
        requests.spawn(async move {
            let _permit = permit;
            tokio::select! {
                biased;
                _ = pipeline.abandon.cancelled() => {
                    PipelineMetrics::incr(&pipeline.metrics.abandoned);
                }
                _ = respond(&pipeline, request) => {}
            }
        });
    }

    queue.close();
    debug!("Processing loop stopped");
}

async fn respond(pipeline: &Pipeline, request: DnsRequest) {
    let response = match pipeline.handler.execute(&request).await {
        Ok(response) => response,
        Err(e) => {
            PipelineMetrics::incr(&pipeline.metrics.assembly_failures);
            error!(
                client = %request.client,
                id = request.header.id,
                error = %e,
                "Failed to assemble response"
            );
            return;
        }
    };

    match pipeline.socket.send_to(&response, request.client).await {
        Ok(_) => PipelineMetrics::incr(&pipeline.metrics.responses_sent),
        Err(e) => {
            PipelineMetrics::incr(&pipeline.metrics.send_failures);
            warn!(client = %request.client, error = %e, "Failed to send response");
        }
    }
}
