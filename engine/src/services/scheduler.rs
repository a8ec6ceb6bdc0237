//! Periodic batch performances

use std::time::Duration;

use shared::{ProcessId, logging, process_info};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at};

use crate::services::lifecycle::Lifecycle;

/// Runs `all_perform` on a fixed interval until stopped
pub struct PerformanceScheduler {
    lifecycle: Lifecycle,
    period: Duration,
}

/// Handle to a running scheduler
pub struct SchedulerHandle {
    shutdown_tx: mpsc::Sender<()>,
    task: JoinHandle<u64>,
}

impl SchedulerHandle {
    /// Signal the scheduler to stop and wait for it; returns the number of
    /// batches it ran
    pub async fn stop(self) -> u64 {
        let _ = self.shutdown_tx.send(()).await;
        match self.task.await {
            Ok(batches) => batches,
            Err(e) => {
                logging::log_error(ProcessId::current(), "Performance scheduler task", &e);
                0
            }
        }
    }
}

impl PerformanceScheduler {
    pub fn new(lifecycle: Lifecycle, period: Duration) -> Self {
        Self { lifecycle, period }
    }

    /// Start the loop on the current runtime; the first batch runs one
    /// period after start
    pub fn spawn(self) -> SchedulerHandle {
        let (shutdown_tx, mut shutdown_rx) = mpsc::channel::<()>(1);

        let task = tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + self.period, self.period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            let mut batches = 0u64;

            process_info!(
                ProcessId::current(),
                "⏱️ Performance scheduler running every {:?}",
                self.period
            );

            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        match self.lifecycle.all_perform().await {
                            Ok(_) => batches += 1,
                            Err(e) => logging::log_error(ProcessId::current(), "Scheduled batch performance", &e),
                        }
                    }
                    _ = shutdown_rx.recv() => {
                        logging::log_shutdown(ProcessId::current(), "performance scheduler stopped");
                        break;
                    }
                }
            }
            batches
        });

        SchedulerHandle { shutdown_tx, task }
    }
}
