//! Periodic scheduling for fleet checks
//!
//! The scheduler fires once per interval, starting one interval after
//! [`MonitorScheduler::run`] is called, and stops when its [`ShutdownHandle`]
//! is triggered or an optional tick limit is reached. A tick that is already
//! running is allowed to finish; request timeouts bound how long that takes.
//!
//! ```ignore
//! let (scheduler, shutdown) = MonitorScheduler::new(Duration::from_secs(300));
//! tokio::spawn(async move {
//!     tokio::signal::ctrl_c().await.ok();
//!     shutdown.shutdown();
//! });
//! let ticks = scheduler.run(|tick| service.run_tick(tick)).await;
//! ```

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info};

/// Stops a running [`MonitorScheduler`]
#[derive(Clone)]
pub struct ShutdownHandle {
    sender: Arc<watch::Sender<bool>>,
}

impl ShutdownHandle {
    pub fn shutdown(&self) {
        // send_replace stores the value even if the scheduler has not started yet
        self.sender.send_replace(true);
    }
}

pub struct MonitorScheduler {
    interval: Duration,
    max_ticks: Option<u64>,
    shutdown: watch::Receiver<bool>,
}

impl MonitorScheduler {
    pub fn new(interval: Duration) -> (Self, ShutdownHandle) {
        let (sender, receiver) = watch::channel(false);
        let scheduler = Self {
            interval,
            max_ticks: None,
            shutdown: receiver,
        };
        let handle = ShutdownHandle {
            sender: Arc::new(sender),
        };
        (scheduler, handle)
    }

    /// Stop on its own after `max_ticks` ticks
    pub fn with_max_ticks(mut self, max_ticks: u64) -> Self {
        self.max_ticks = Some(max_ticks);
        self
    }

    /// Call `on_tick` with a 1-based tick number until stopped. Returns the
    /// number of ticks that ran.
    pub async fn run<F, Fut>(mut self, mut on_tick: F) -> u64
    where
        F: FnMut(u64) -> Fut,
        Fut: Future,
    {
        let mut ticker = interval_at(Instant::now() + self.interval, self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let mut completed = 0u64;
        // Once every handle is dropped nobody can stop us, keep ticking
        let mut handle_dropped = false;

        loop {
            if self.max_ticks.is_some_and(|max| completed >= max) {
                debug!("Reached tick limit of {}", completed);
                break;
            }
            if *self.shutdown.borrow() {
                break;
            }

            tokio::select! {
                _ = ticker.tick() => {}
                changed = self.shutdown.changed(), if !handle_dropped => {
                    if changed.is_err() {
                        handle_dropped = true;
                    }
                    continue;
                }
            }

            completed += 1;
            on_tick(completed).await;
        }

        info!("Scheduler stopped after {} ticks", completed);
        completed
    }
}
