//! Background worker that runs service calls and the UI side handle to it.
//!
//! The UI thread owns the [`EditorStore`]. Calls are queued to a thread that
//! owns a tokio runtime; their outcomes come back over a std channel and are
//! applied by [`ServiceClient::poll`], once per frame. Each call is bounded
//! by the configured timeout.

use std::future::Future;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Runtime;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tracing::{debug, error, info, warn};

use super::{
    AlgorithmsResponse, ComputeRequest, ComputeResponse, HealthResponse, SeparatorService,
    VersionResponse,
};
use crate::data::health::{HealthMonitor, ServiceCatalog};
use crate::data::store::{EditorStore, FinishOutcome};
use crate::error::ApiError;

const WORKER_GONE: &str = "service worker is not running";

/// Work queued to the background runtime.
#[derive(Debug, Clone)]
pub enum ServiceJob {
    Compute { seq: u64, request: ComputeRequest },
    Health,
    Algorithms,
    Version,
}

impl ServiceJob {
    /// The event reporting that this job failed with `error`.
    pub fn fail(self, error: ApiError) -> ServiceEvent {
        match self {
            ServiceJob::Compute { seq, .. } => ServiceEvent::Computed {
                seq,
                outcome: Err(error),
            },
            ServiceJob::Health => ServiceEvent::Health(Err(error)),
            ServiceJob::Algorithms => ServiceEvent::Algorithms(Err(error)),
            ServiceJob::Version => ServiceEvent::Version(Err(error)),
        }
    }
}

/// Outcome of one [`ServiceJob`], delivered back to the UI thread.
#[derive(Debug, Clone)]
pub enum ServiceEvent {
    Computed {
        seq: u64,
        outcome: Result<ComputeResponse, ApiError>,
    },
    Health(Result<HealthResponse, ApiError>),
    Algorithms(Result<AlgorithmsResponse, ApiError>),
    Version(Result<VersionResponse, ApiError>),
}

/// Everything [`ServiceClient::poll`] writes into.
pub struct ClientTargets<'a> {
    pub store: &'a mut EditorStore,
    pub health: &'a mut HealthMonitor,
    pub catalog: &'a mut ServiceCatalog,
}

pub struct ServiceClient {
    jobs: UnboundedSender<ServiceJob>,
    events: Receiver<ServiceEvent>,
    pending: usize,
}

impl ServiceClient {
    /// Start the worker thread for `service`.
    pub fn spawn<S: SeparatorService>(service: S, timeout: Duration) -> Self {
        Self::spawn_on(service, timeout, Runtime::new())
    }

    /// Start the worker on an already built runtime.
    ///
    /// If the runtime could not be built, every job is still answered, with
    /// a transport error, so nothing waits on the worker forever.
    pub fn spawn_on<S: SeparatorService>(
        service: S,
        timeout: Duration,
        runtime: std::io::Result<Runtime>,
    ) -> Self {
        let (job_tx, job_rx) = unbounded_channel();
        let (event_tx, event_rx) = mpsc::channel();
        match runtime {
            Ok(rt) => spawn_worker(rt, Arc::new(service), timeout, job_rx, event_tx),
            Err(e) => {
                error!("failed to start service runtime: {e}");
                spawn_refusals(
                    ApiError::Transport(format!("{WORKER_GONE}: {e}")),
                    job_rx,
                    event_tx,
                );
            }
        }
        Self {
            jobs: job_tx,
            events: event_rx,
            pending: 0,
        }
    }

    /// Number of queued calls without a delivered outcome.
    pub fn pending(&self) -> usize {
        self.pending
    }

    pub fn is_idle(&self) -> bool {
        self.pending == 0
    }

    /// Probe service health, at most once per monitor.
    pub fn check_health(&mut self, health: &mut HealthMonitor) {
        if !health.start() {
            return;
        }
        if let Err(e) = self.submit(ServiceJob::Health) {
            health.resolve(Err(e));
        }
    }

    /// Fetch the algorithm catalog and service version for display.
    pub fn fetch_catalog(&mut self, catalog: &mut ServiceCatalog) {
        if let Err(e) = self.submit(ServiceJob::Algorithms) {
            catalog.resolve_algorithms(Err(e.clone()));
        }
        if let Err(e) = self.submit(ServiceJob::Version) {
            catalog.resolve_version(Err(e));
        }
    }

    /// Validate and start a computation on the current point sets.
    ///
    /// Returns the sequence number of the issued request. A validation
    /// failure is recorded in the store and nothing is sent.
    pub fn compute(&mut self, store: &mut EditorStore) -> Result<u64, ApiError> {
        let ticket = match store.begin_compute() {
            Ok(ticket) => ticket,
            Err(e) => {
                warn!(error = %e, "compute rejected");
                return Err(e);
            }
        };
        let seq = ticket.seq;
        if let Err(e) = self.submit(ServiceJob::Compute {
            seq,
            request: ticket.request,
        }) {
            store.finish_compute(seq, Err(e.clone()));
            return Err(e);
        }
        Ok(seq)
    }

    /// Apply every outcome that has arrived. Returns how many were applied.
    pub fn poll(&mut self, targets: ClientTargets<'_>) -> usize {
        let ClientTargets {
            store,
            health,
            catalog,
        } = targets;
        let mut applied = 0;
        while let Ok(event) = self.events.try_recv() {
            self.pending = self.pending.saturating_sub(1);
            applied += 1;
            match event {
                ServiceEvent::Computed { seq, outcome } => {
                    match store.finish_compute(seq, outcome) {
                        FinishOutcome::Applied => info!(seq, "computation result applied"),
                        FinishOutcome::Failed => {
                            warn!(seq, error = store.error().unwrap_or_default(), "computation failed")
                        }
                        FinishOutcome::Stale => debug!(seq, "stale computation ignored"),
                    }
                }
                ServiceEvent::Health(outcome) => health.resolve(outcome),
                ServiceEvent::Algorithms(outcome) => catalog.resolve_algorithms(outcome),
                ServiceEvent::Version(outcome) => catalog.resolve_version(outcome),
            }
        }
        applied
    }

    fn submit(&mut self, job: ServiceJob) -> Result<(), ApiError> {
        self.jobs.send(job).map_err(|_| {
            error!("{}", WORKER_GONE);
            ApiError::Transport(WORKER_GONE.to_string())
        })?;
        self.pending += 1;
        Ok(())
    }
}

fn spawn_worker<S: SeparatorService>(
    rt: Runtime,
    service: Arc<S>,
    timeout: Duration,
    mut jobs: UnboundedReceiver<ServiceJob>,
    events: Sender<ServiceEvent>,
) {
    std::thread::spawn(move || {
        rt.block_on(async move {
            while let Some(job) = jobs.recv().await {
                let service = Arc::clone(&service);
                let events = events.clone();
                tokio::spawn(async move {
                    let event = run_job(service.as_ref(), job, timeout).await;
                    // Receiver gone means the UI has shut down.
                    let _ = events.send(event);
                });
            }
        });
    });
}

/// Fallback worker: answers every job with `error`.
fn spawn_refusals(
    error: ApiError,
    mut jobs: UnboundedReceiver<ServiceJob>,
    events: Sender<ServiceEvent>,
) {
    std::thread::spawn(move || {
        while let Some(job) = jobs.blocking_recv() {
            if events.send(job.fail(error.clone())).is_err() {
                break;
            }
        }
    });
}

async fn run_job<S: SeparatorService>(service: &S, job: ServiceJob, timeout: Duration) -> ServiceEvent {
    match job {
        ServiceJob::Compute { seq, request } => ServiceEvent::Computed {
            seq,
            outcome: bounded(timeout, service.compute(request)).await,
        },
        ServiceJob::Health => ServiceEvent::Health(bounded(timeout, service.health()).await),
        ServiceJob::Algorithms => {
            ServiceEvent::Algorithms(bounded(timeout, service.algorithms()).await)
        }
        ServiceJob::Version => ServiceEvent::Version(bounded(timeout, service.version()).await),
    }
}

async fn bounded<T>(
    timeout: Duration,
    call: impl Future<Output = Result<T, ApiError>>,
) -> Result<T, ApiError> {
    tokio::time::timeout(timeout, call)
        .await
        .unwrap_or(Err(ApiError::Timeout(timeout)))
}
