use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

/// Counters updated by the pipeline tasks.
#[derive(Default)]
pub struct PipelineMetrics {
    pub received: AtomicU64,
    pub malformed: AtomicU64,
    pub queue_dropped: AtomicU64,
    pub worker_dropped: AtomicU64,
    pub responses_sent: AtomicU64,
    pub send_failures: AtomicU64,
    pub assembly_failures: AtomicU64,
    /// Requests cut off when the shutdown grace period ran out.
    pub abandoned: AtomicU64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineStats {
    pub received: u64,
    pub malformed: u64,
    pub queue_dropped: u64,
    pub worker_dropped: u64,
    pub responses_sent: u64,
    pub send_failures: u64,
    pub assembly_failures: u64,
    pub abandoned: u64,
}

impl PipelineStats {
    /// Requests shed by either admission stage.
    pub fn dropped(&self) -> u64 {
        self.queue_dropped + self.worker_dropped
    }
}

impl PipelineMetrics {
    #[inline]
    pub(crate) fn incr(counter: &AtomicU64) {
        counter.fetch_add(1, AtomicOrdering::Relaxed);
    }

    pub fn snapshot(&self) -> PipelineStats {
        PipelineStats {
            received: self.received.load(AtomicOrdering::Relaxed),
            malformed: self.malformed.load(AtomicOrdering::Relaxed),
            queue_dropped: self.queue_dropped.load(AtomicOrdering::Relaxed),
            worker_dropped: self.worker_dropped.load(AtomicOrdering::Relaxed),
            responses_sent: self.responses_sent.load(AtomicOrdering::Relaxed),
            send_failures: self.send_failures.load(AtomicOrdering::Relaxed),
            assembly_failures: self.assembly_failures.load(AtomicOrdering::Relaxed),
            abandoned: self.abandoned.load(AtomicOrdering::Relaxed),
        }
    }
}
