//! The polling publisher: observer registry, periodic scheduling, and the
//! process-wide instance.
//!
//! The publisher owns a concurrent registry of observers keyed by a
//! caller-supplied identifier and a single background worker that polls the
//! message source at a fixed rate, fanning each message out to every
//! registered observer. Observers may be added and removed from any thread
//! while polling is active.

use crate::core::{MessageSource, Observer};
use crate::source::RandomMessageSource;
use dashmap::DashMap;
use once_cell::sync::OnceCell;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use thiserror::Error;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval, timeout};
use tracing::{debug, error, info, warn};

/// How long `stop_polling` waits for the worker to quiesce before giving up.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(5);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PublisherError {
    #[error("polling period must be greater than zero")]
    InvalidPeriod,

    #[error("polling is already running; stop it before starting a new schedule")]
    AlreadyPolling,
}

/// The scheduling resource backing one start/stop cycle.
///
/// `stop_polling` retires the whole scheduler and installs a fresh one, so
/// a shutdown signal can never leak into a schedule started later.
struct Scheduler {
    shutdown_tx: watch::Sender<()>,
    worker: Option<JoinHandle<()>>,
}

impl Scheduler {
    fn new() -> Self {
        let (shutdown_tx, _) = watch::channel(());
        Self {
            shutdown_tx,
            worker: None,
        }
    }

    fn is_running(&self) -> bool {
        self.worker.is_some()
    }
}

/// Publishes messages from a [`MessageSource`] to a dynamic set of
/// [`Observer`]s on a fixed-rate schedule.
///
/// The registry accepts concurrent inserts, removals, and iteration without
/// caller-side locking. A delivery tick iterates over a snapshot of the
/// registry taken at the start of the fan-out; registrations racing an
/// in-flight tick become visible no later than the next tick.
pub struct PollingPublisher {
    observers: Arc<DashMap<String, Arc<dyn Observer>>>,
    source: Arc<dyn MessageSource>,
    scheduler: Mutex<Scheduler>,
}

impl PollingPublisher {
    /// Creates a publisher backed by the given message source.
    ///
    /// Constructing instances directly is the composition-friendly path;
    /// [`PollingPublisher::global`] provides the process-wide instance.
    pub fn new(source: Arc<dyn MessageSource>) -> Self {
        Self {
            observers: Arc::new(DashMap::new()),
            source,
            scheduler: Mutex::new(Scheduler::new()),
        }
    }

    /// Returns the process-wide publisher, constructing it on first call.
    ///
    /// Initialization happens exactly once even under concurrent first
    /// access; all callers observe the fully constructed instance.
    pub fn global() -> &'static PollingPublisher {
        static GLOBAL: OnceCell<PollingPublisher> = OnceCell::new();
        GLOBAL.get_or_init(|| PollingPublisher::new(Arc::new(RandomMessageSource)))
    }

    /// Inserts an observer under `key`, replacing any prior observer
    /// registered under the same key.
    ///
    /// The change is visible to the next tick; no ordering is guaranteed
    /// relative to a tick already in flight.
    pub fn add_observer(&self, key: impl Into<String>, observer: Arc<dyn Observer>) {
        let key = key.into();
        debug!(observer = %key, "registering observer");
        self.observers.insert(key, observer);
    }

    /// Removes the observer registered under `key`. Removing an absent key
    /// is a silent no-op.
    pub fn remove_observer(&self, key: &str) {
        if self.observers.remove(key).is_some() {
            debug!(observer = %key, "removed observer");
        }
    }

    /// The number of currently registered observers.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Whether a polling schedule is currently active.
    pub fn is_polling(&self) -> bool {
        self.scheduler.lock().unwrap().is_running()
    }

    /// Starts polling the message source every `period`, delivering each
    /// message to all registered observers. The first tick fires
    /// immediately; subsequent ticks keep fixed-rate spacing. Ticks never
    /// overlap: a tick that outruns the period delays the next one.
    ///
    /// # Errors
    /// * [`PublisherError::InvalidPeriod`] if `period` is zero
    /// * [`PublisherError::AlreadyPolling`] if a schedule is already active
    ///
    /// Must be called from within a tokio runtime.
    pub fn start_polling(&self, period: Duration) -> Result<(), PublisherError> {
        if period.is_zero() {
            return Err(PublisherError::InvalidPeriod);
        }

        let mut scheduler = self.scheduler.lock().unwrap();
        if scheduler.is_running() {
            return Err(PublisherError::AlreadyPolling);
        }

        let observers = Arc::clone(&self.observers);
        let source = Arc::clone(&self.source);
        let mut shutdown_rx = scheduler.shutdown_tx.subscribe();

        scheduler.worker = Some(tokio::spawn(async move {
            let mut timer = interval(period);
            loop {
                tokio::select! {
                    biased;

                    _ = shutdown_rx.changed() => {
                        debug!("polling worker received shutdown, exiting");
                        break;
                    }

                    _ = timer.tick() => {
                        deliver_tick(source.as_ref(), &observers).await;
                    }
                }
            }
        }));

        info!(period_ms = period.as_millis() as u64, "polling started");
        Ok(())
    }

    /// Stops the active polling schedule.
    ///
    /// No new ticks are admitted after the shutdown signal; a tick already
    /// executing is allowed to finish. The call waits up to a bounded grace
    /// interval for the worker to quiesce and only logs a warning on
    /// timeout. A fresh scheduling resource is installed before waiting, so
    /// the publisher remains usable for a future [`start_polling`] either
    /// way. Calling this when polling was never started is a no-op.
    ///
    /// [`start_polling`]: PollingPublisher::start_polling
    pub async fn stop_polling(&self) {
        // Swap in a fresh scheduler under the lock, then wait outside it so
        // a concurrent start_polling is never blocked on the grace interval.
        let retired = {
            let mut scheduler = self.scheduler.lock().unwrap();
            std::mem::replace(&mut *scheduler, Scheduler::new())
        };

        let Some(worker) = retired.worker else {
            debug!("stop requested but no polling schedule is active");
            return;
        };

        info!("stopping polling");
        // A send fails only if the worker already exited.
        let _ = retired.shutdown_tx.send(());

        match timeout(SHUTDOWN_GRACE, worker).await {
            Ok(Ok(())) => info!("polling stopped"),
            Ok(Err(e)) => error!(error = %e, "polling worker failed during shutdown"),
            Err(_) => warn!(
                grace_secs = SHUTDOWN_GRACE.as_secs(),
                "timed out waiting for the polling worker to stop"
            ),
        }
    }
}

/// One poll-and-notify cycle: generate a message and fan it out to a
/// snapshot of the registry.
///
/// Each observer is invoked in isolation; a failing handler is logged and
/// counted but never suppresses delivery to the observers after it.
async fn deliver_tick(source: &dyn MessageSource, observers: &DashMap<String, Arc<dyn Observer>>) {
    let message = source.generate();
    debug!(channel = %message.channel(), "delivering message to observers");
    metrics::counter!("pollcast_ticks_total").increment(1);

    // Snapshot so no shard lock is held across an await point.
    let snapshot: Vec<(String, Arc<dyn Observer>)> = observers
        .iter()
        .map(|entry| (entry.key().clone(), Arc::clone(entry.value())))
        .collect();

    for (key, observer) in snapshot {
        if let Err(e) = observer.handle(&message).await {
            metrics::counter!("pollcast_observer_failures_total").increment(1);
            error!(
                observer = %key,
                handler = observer.name(),
                error = %e,
                "observer failed to handle message"
            );
        }
    }
}
