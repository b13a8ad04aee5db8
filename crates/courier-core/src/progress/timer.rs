//! Phase timers.

use std::sync::Arc;
use std::sync::Weak;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use tokio::time::{Instant, MissedTickBehavior};

use crate::domain::Phase;

/// Counts timer tasks that have not been torn down yet.
///
/// Acquired before the task is spawned and dropped with the task's future,
/// so an aborted task is counted until the runtime actually drops it.
pub(crate) struct TimerGuard {
    live: Arc<AtomicUsize>,
}

impl TimerGuard {
    pub(crate) fn acquire(live: &Arc<AtomicUsize>) -> Self {
        live.fetch_add(1, Ordering::SeqCst);
        Self {
            live: Arc::clone(live),
        }
    }
}

impl Drop for TimerGuard {
    fn drop(&mut self) {
        self.live.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Implemented by the indicator's shared state; returns whether the timer
/// should keep running.
pub(crate) trait Ticks: Send + Sync + 'static {
    fn tick(&self, phase: Phase, generation: u64) -> bool;
}

/// Fire `tick` every `period`, starting one period from now. Ends when the
/// target is gone or reports the phase finished or superseded.
pub(crate) async fn run_phase<T: Ticks>(
    target: Weak<T>,
    phase: Phase,
    generation: u64,
    period: Duration,
    _guard: TimerGuard,
) {
    let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    loop {
        ticker.tick().await;
        let Some(strong) = target.upgrade() else {
            break;
        };
        if !strong.tick(phase, generation) {
            break;
        }
    }
}
