//! Drives the stepper on a fixed interval.

use std::time::Duration;

use rand::rngs::StdRng;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::store::CatalogStore;
use crate::stepper::step_catalog;

/// Handle to a running ticker task.
pub struct TickerHandle {
    stop_tx: Option<oneshot::Sender<()>>,
    task: JoinHandle<u64>,
}

impl TickerHandle {
    /// Stops the ticker and returns how many updates it applied.
    ///
    /// Each update runs to completion before the ticker checks for a stop
    /// request, so no half-applied snapshot is ever published.
    pub async fn stop(mut self) -> u64 {
        if let Some(tx) = self.stop_tx.take() {
            let _ = tx.send(());
        }

        match self.task.await {
            Ok(ticks) => ticks,
            Err(e) => {
                log::error!("Ticker task failed: {e}");
                0
            }
        }
    }
}

/// Spawns a task that advances `store` every `period`.
///
/// The first update happens one full period after spawning.
#[must_use]
pub fn spawn_ticker(store: CatalogStore, mut rng: StdRng, period: Duration) -> TickerHandle {
    let (stop_tx, mut stop_rx) = oneshot::channel();

    let task = tokio::spawn(async move {
        let mut interval = tokio::time::interval_at(tokio::time::Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let mut ticks = 0_u64;

        log::info!("Live updates every {}s", period.as_secs_f64());

        loop {
            tokio::select! {
                _ = &mut stop_rx => break,
                _ = interval.tick() => {
                    let next = store.advance(|current| step_catalog(current, &mut rng));
                    ticks += 1;
                    log::debug!("Tick {} published {} wards", next.tick, next.wards.len());
                }
            }
        }

        log::info!("Ticker stopped after {ticks} updates");
        ticks
    });

    TickerHandle {
        stop_tx: Some(stop_tx),
        task,
    }
}
