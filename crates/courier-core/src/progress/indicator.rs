use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use super::timer::{Ticks, TimerGuard, run_phase};
use crate::config::ProgressConfig;
use crate::domain::{FinishStep, Phase, ProgressCurve, ProgressState};
use crate::error::CourierError;
use crate::sync::lock;

/// Timer-driven progress value for route transitions.
///
/// Cloning is cheap and every clone drives the same state.
#[derive(Clone)]
pub struct ProgressIndicator {
    shared: Arc<Shared>,
}

struct Shared {
    curve: ProgressCurve,
    period: Duration,
    runtime: Handle,
    inner: Mutex<Inner>,
    tx: watch::Sender<ProgressState>,
    live_timers: Arc<AtomicUsize>,
}

/// At most one timer; `generation` changes on every phase switch so ticks
/// of a superseded timer are ignored.
struct Inner {
    state: ProgressState,
    phase: Phase,
    generation: u64,
    timer: Option<JoinHandle<()>>,
}

impl ProgressIndicator {
    /// Build on the current tokio runtime.
    pub fn new(config: ProgressConfig) -> Result<Self, CourierError> {
        let runtime = Handle::try_current().map_err(|_| CourierError::NoRuntime)?;
        Self::with_runtime(config, runtime)
    }

    /// Build on an explicit runtime, so `start`/`stop` can be called from
    /// threads outside it.
    pub fn with_runtime(config: ProgressConfig, runtime: Handle) -> Result<Self, CourierError> {
        config.validate()?;
        let (tx, _rx) = watch::channel(ProgressState::default());
        Ok(Self {
            shared: Arc::new(Shared {
                period: config.tick_interval(),
                curve: ProgressCurve::new(config),
                runtime,
                inner: Mutex::new(Inner {
                    state: ProgressState::default(),
                    phase: Phase::Idle,
                    generation: 0,
                    timer: None,
                }),
                tx,
                live_timers: Arc::new(AtomicUsize::new(0)),
            }),
        })
    }

    /// Begin (or restart) the ramp-up. Cancels whichever timer is running.
    pub fn start(&self) {
        Shared::begin(&self.shared, Phase::RampUp);
    }

    /// Begin the ramp-down from the current value, whether or not a ramp-up
    /// preceded it.
    pub fn stop(&self) {
        Shared::begin(&self.shared, Phase::RampDown);
    }

    /// Run `transition` between `start()` and `stop()`.
    pub async fn track<F: Future>(&self, transition: F) -> F::Output {
        self.start();
        let output = transition.await;
        self.stop();
        output
    }

    pub fn state(&self) -> ProgressState {
        *self.shared.tx.borrow()
    }

    pub fn current(&self) -> f64 {
        self.state().current
    }

    pub fn is_loading(&self) -> bool {
        self.state().is_loading
    }

    pub fn phase(&self) -> Phase {
        lock(&self.shared.inner).phase
    }

    /// Receives every published state; `current == 100` is never published.
    pub fn subscribe(&self) -> watch::Receiver<ProgressState> {
        self.shared.tx.subscribe()
    }

    /// Timer tasks not yet torn down. A cancelled timer stays counted until
    /// the runtime drops it, but never ticks again.
    pub fn active_timers(&self) -> usize {
        self.shared.live_timers.load(Ordering::SeqCst)
    }
}

impl Shared {
    fn begin(this: &Arc<Self>, phase: Phase) {
        let mut inner = lock(&this.inner);
        inner.generation = inner.generation.wrapping_add(1);
        if let Some(previous) = inner.timer.take() {
            previous.abort();
        }
        inner.phase = phase;
        if phase == Phase::RampUp && !inner.state.is_loading {
            inner.state.is_loading = true;
            this.tx.send_replace(inner.state);
        }

        let guard = TimerGuard::acquire(&this.live_timers);
        let task = run_phase(Arc::downgrade(this), phase, inner.generation, this.period, guard);
        inner.timer = Some(this.runtime.spawn(task));
        tracing::debug!(?phase, current = inner.state.current, "progress phase started");
    }
}

impl Ticks for Shared {
    fn tick(&self, phase: Phase, generation: u64) -> bool {
        let mut inner = lock(&self.inner);
        if inner.generation != generation || inner.phase != phase {
            return false;
        }
        match phase {
            Phase::RampUp => {
                let next = self.curve.ramp_up(inner.state.current);
                if next != inner.state.current {
                    inner.state.current = next;
                    self.tx.send_replace(inner.state);
                }
                true
            }
            Phase::RampDown => match self.curve.ramp_down(inner.state.current) {
                FinishStep::Advance(next) => {
                    inner.state.current = next;
                    self.tx.send_replace(inner.state);
                    true
                }
                FinishStep::Complete => {
                    // reaching 100 resets and clears loading in one update
                    inner.state = ProgressState {
                        current: 0.0,
                        is_loading: false,
                    };
                    inner.phase = Phase::Idle;
                    inner.timer = None;
                    self.tx.send_replace(inner.state);
                    tracing::debug!("progress complete");
                    false
                }
            },
            Phase::Idle => false,
        }
    }
}

impl Drop for Shared {
    fn drop(&mut self) {
        let inner = self.inner.get_mut().unwrap_or_else(|e| e.into_inner());
        if let Some(timer) = inner.timer.take() {
            timer.abort();
        }
    }
}
