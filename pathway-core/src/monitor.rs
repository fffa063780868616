//! Availability monitoring for the recommendation service
//!
//! A single cancellable background task probes `/health` immediately on
//! start and then on a fixed cadence, keeping a tri-state availability
//! value current. `Checking` only exists before the first probe resolves;
//! later probes flip between `Online` and `Offline` without passing through
//! it again, so consumers never flicker back to an indeterminate state.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::{Notify, RwLock, broadcast};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::backend::RecommendBackend;

/// Probe cadence used by [`AvailabilityMonitor::new`].
pub const PROBE_INTERVAL: Duration = Duration::from_secs(30);

/// Tri-state service availability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AvailabilityStatus {
    /// No probe has completed yet.
    Checking,
    /// The last probe succeeded.
    Online,
    /// The last probe failed.
    Offline,
}

/// Current availability plus the time of the most recent completed probe,
/// recorded regardless of outcome.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Availability {
    /// Current status.
    pub status: AvailabilityStatus,
    /// When the last probe completed, if any has.
    pub last_checked: Option<DateTime<Utc>>,
}

impl Default for Availability {
    fn default() -> Self {
        Self {
            status: AvailabilityStatus::Checking,
            last_checked: None,
        }
    }
}

/// Periodically probes the recommendation service and exposes its
/// availability.
///
/// Owns one background task between [`start`](Self::start) and
/// [`stop`](Self::stop). Manual [`recheck`](Self::recheck) fires the probe
/// early on the same task; it never spawns a second timer.
pub struct AvailabilityMonitor {
    backend: Arc<dyn RecommendBackend>,
    probe_interval: Duration,
    state: Arc<RwLock<Availability>>,
    event_tx: broadcast::Sender<Availability>,
    recheck: Arc<Notify>,
    shutdown: CancellationToken,
    task: Option<JoinHandle<()>>,
}

impl AvailabilityMonitor {
    /// Monitor with the default 30-second cadence.
    pub fn new(backend: Arc<dyn RecommendBackend>) -> Self {
        Self::with_interval(backend, PROBE_INTERVAL)
    }

    /// Monitor with a custom probe cadence.
    pub fn with_interval(backend: Arc<dyn RecommendBackend>, probe_interval: Duration) -> Self {
        let (event_tx, _) = broadcast::channel(16);
        Self {
            backend,
            probe_interval,
            state: Arc::new(RwLock::new(Availability::default())),
            event_tx,
            recheck: Arc::new(Notify::new()),
            shutdown: CancellationToken::new(),
            task: None,
        }
    }

    /// Current availability.
    pub async fn availability(&self) -> Availability {
        *self.state.read().await
    }

    /// Subscribe to probe completions.
    ///
    /// An event is emitted after every completed probe, even when the
    /// status did not change.
    pub fn subscribe(&self) -> broadcast::Receiver<Availability> {
        self.event_tx.subscribe()
    }

    /// Whether the probe task is running.
    pub fn is_running(&self) -> bool {
        self.task.is_some()
    }

    /// Start probing: once immediately, then on the configured cadence.
    ///
    /// Starting an already-started monitor is a no-op.
    pub fn start(&mut self) {
        if self.task.is_some() {
            return;
        }

        let backend = self.backend.clone();
        let state = self.state.clone();
        let event_tx = self.event_tx.clone();
        let recheck = self.recheck.clone();
        let shutdown = self.shutdown.clone();
        let probe_interval = self.probe_interval;

        self.task = Some(tokio::spawn(async move {
            let mut interval = tokio::time::interval(probe_interval);
            loop {
                tokio::select! {
                    _ = shutdown.cancelled() => break,
                    _ = interval.tick() => {}
                    _ = recheck.notified() => {}
                }

                let healthy = backend.check_health().await;
                if shutdown.is_cancelled() {
                    break;
                }

                let snapshot = {
                    let mut state = state.write().await;
                    state.status = if healthy {
                        AvailabilityStatus::Online
                    } else {
                        AvailabilityStatus::Offline
                    };
                    state.last_checked = Some(Utc::now());
                    *state
                };
                debug!(status = ?snapshot.status, "health probe completed");
                let _ = event_tx.send(snapshot);
            }
        }));
    }

    /// Fire the probe early on the running task.
    ///
    /// A no-op when the monitor is stopped.
    pub fn recheck(&self) {
        self.recheck.notify_one();
    }

    /// Cancel the probe task. No probe updates state after this returns;
    /// the monitor can be started again later.
    pub fn stop(&mut self) {
        self.shutdown.cancel();
        if let Some(task) = self.task.take() {
            task.abort();
        }
        self.shutdown = CancellationToken::new();
    }
}

impl Drop for AvailabilityMonitor {
    fn drop(&mut self) {
        self.stop();
    }
}
