//! Progress model: the observable state and the per-tick curve.
//!
//! The curve is a pair of pure step functions. The timers that drive them
//! live in `crate::progress`.

use serde::{Deserialize, Serialize};

use crate::config::ProgressConfig;

/// Completion value of the ramp-down phase.
pub const COMPLETE: f64 = 100.0;

/// What a progress bar renders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressState {
    pub current: f64,
    pub is_loading: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    RampUp,
    RampDown,
}

/// Result of one ramp-down tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FinishStep {
    Advance(f64),
    Complete,
}

#[derive(Debug, Clone)]
pub struct ProgressCurve {
    config: ProgressConfig,
}

impl ProgressCurve {
    pub fn new(config: ProgressConfig) -> Self {
        Self { config }
    }

    /// One ramp-up tick. Monotone, and never moves past the ceiling. A value
    /// already at or above the ceiling is left as is.
    pub fn ramp_up(&self, current: f64) -> f64 {
        let c = &self.config;
        if current >= c.ceiling {
            return current;
        }
        let step = if current < c.linear_until {
            c.linear_step
        } else if current < c.decelerate_until {
            ((c.decelerate_until - current) * c.decelerate_rate).max(c.creep_step)
        } else {
            c.creep_step
        };
        (current + step).min(c.ceiling)
    }

    /// One ramp-down tick.
    pub fn ramp_down(&self, current: f64) -> FinishStep {
        let next = (current + self.config.finish_step).min(COMPLETE);
        if next >= COMPLETE {
            FinishStep::Complete
        } else {
            FinishStep::Advance(next)
        }
    }
}
