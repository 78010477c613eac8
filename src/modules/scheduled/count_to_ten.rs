// Periodic job that counts from one to ten on every tick.
//
// Runs on its own task and shares nothing with request handling.

use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

pub const DEFAULT_PERIOD: Duration = Duration::from_secs(5);

pub fn count_to_ten() -> impl Iterator<Item = u32> {
    1..=10
}

pub struct CountToTenWorker {
    period: Duration,
}

impl CountToTenWorker {
    pub fn new(period: Duration) -> Self {
        Self { period }
    }

    pub fn tick(&self) -> u32 {
        let mut emitted = 0;
        for i in count_to_ten() {
            tracing::info!(target: "scheduled::count_to_ten", "{i}");
            emitted += 1;
        }
        emitted
    }

    /// Spawns the loop. It ends once `shutdown` flips to `true` or its sender
    /// is dropped; the returned handle resolves to the number of ticks run.
    pub fn spawn(self, mut shutdown: watch::Receiver<bool>) -> JoinHandle<u64> {
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(self.period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            let mut ticks = 0u64;
            loop {
                tokio::select! {
                    biased;
                    changed = shutdown.changed() => {
                        if changed.is_err() || *shutdown.borrow() {
                            break;
                        }
                    }
                    _ = interval.tick() => {
                        self.tick();
                        ticks += 1;
                    }
                }
            }
            tracing::info!(ticks, "count_to_ten worker stopped");
            ticks
        })
    }
}
