use crate::CacheCompactionJob;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::info;

pub trait SpawnableJob: Send + Sync + 'static {
    fn with_cancellation(self, token: CancellationToken) -> Self;
    fn start_job(self: Arc<Self>) -> JoinHandle<()>;
}

macro_rules! impl_spawnable_job {
    ($t:ty) => {
        impl SpawnableJob for $t {
            fn with_cancellation(self, token: CancellationToken) -> Self {
                self.with_cancellation(token)
            }

            fn start_job(self: Arc<Self>) -> JoinHandle<()> {
                tokio::spawn(async move { self.start().await })
            }
        }
    };
}

impl_spawnable_job!(CacheCompactionJob);

fn spawn_job<J: SpawnableJob>(
    job: Option<J>,
    shutdown: &Option<CancellationToken>,
) -> Option<JoinHandle<()>> {
    job.map(|job| {
        let job = match shutdown {
            Some(token) => job.with_cancellation(token.clone()),
            None => job,
        };
        Arc::new(job).start_job()
    })
}

/// Starts every configured background job under one shared shutdown token.
#[derive(Default)]
pub struct JobRunner {
    cache_compaction: Option<CacheCompactionJob>,
    shutdown: Option<CancellationToken>,
}

impl JobRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cache_compaction(mut self, job: CacheCompactionJob) -> Self {
        self.cache_compaction = Some(job);
        self
    }

    pub fn with_shutdown_token(mut self, token: CancellationToken) -> Self {
        self.shutdown = Some(token);
        self
    }

    /// Spawns the jobs and returns their handles so callers can await them after cancelling.
    pub fn start(self) -> Vec<JoinHandle<()>> {
        info!("Starting background jobs");

        spawn_job(self.cache_compaction, &self.shutdown)
            .into_iter()
            .collect()
    }
}
