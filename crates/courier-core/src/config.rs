//! Configuration loaded from `courier.toml`.
//!
//! Every section is `#[serde(default)]`, so an empty file (or no file) gives
//! the defaults below.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::CourierError;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CourierConfig {
    pub agent: AgentConfig,
    pub progress: ProgressConfig,
}

impl CourierConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, CourierError> {
        let config: CourierConfig =
            toml::from_str(raw).map_err(|e| CourierError::Config(e.to_string()))?;
        config.progress.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, CourierError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| CourierError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&raw)
    }
}

/// Notification agent settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Cache kept on activation; every other cache name is purged.
    pub cache_name: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            cache_name: "courier-v1".to_string(),
        }
    }
}

/// Progress curve constants.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProgressConfig {
    pub tick_interval_ms: u64,
    /// Below this value ramp-up advances by `linear_step`.
    pub linear_until: f64,
    pub linear_step: f64,
    /// Between `linear_until` and this value ramp-up decelerates.
    pub decelerate_until: f64,
    pub decelerate_rate: f64,
    /// Increment used above `decelerate_until`, and the floor of the
    /// decelerating step.
    pub creep_step: f64,
    /// Hard clamp for ramp-up.
    pub ceiling: f64,
    /// Ramp-down increment per tick.
    pub finish_step: f64,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 10,
            linear_until: 60.0,
            linear_step: 1.0,
            decelerate_until: 70.0,
            decelerate_rate: 0.05,
            creep_step: 0.01,
            ceiling: 80.0,
            finish_step: 5.0,
        }
    }
}

impl ProgressConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn validate(&self) -> Result<(), CourierError> {
        if self.tick_interval_ms == 0 {
            return Err(CourierError::Config(
                "progress.tick_interval_ms must be greater than 0".to_string(),
            ));
        }
        let ordered = 0.0 <= self.linear_until
            && self.linear_until <= self.decelerate_until
            && self.decelerate_until <= self.ceiling
            && self.ceiling < 100.0;
        if !ordered {
            return Err(CourierError::Config(format!(
                "progress thresholds must satisfy 0 <= linear_until <= decelerate_until <= ceiling < 100 (got {} / {} / {})",
                self.linear_until, self.decelerate_until, self.ceiling
            )));
        }
        let steps = [
            ("linear_step", self.linear_step),
            ("creep_step", self.creep_step),
            ("finish_step", self.finish_step),
        ];
        for (name, step) in steps {
            if step <= 0.0 {
                return Err(CourierError::Config(format!(
                    "progress.{name} must be positive (got {step})"
                )));
            }
        }
        if self.decelerate_rate < 0.0 {
            return Err(CourierError::Config(
                "progress.decelerate_rate must not be negative".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_gives_defaults() {
        let config = CourierConfig::from_toml_str("").unwrap();
        assert_eq!(config, CourierConfig::default());
        assert_eq!(config.progress.tick_interval(), Duration::from_millis(10));
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let raw = r#"
            [agent]
            cache_name = "lms-v7"

            [progress]
            tick_interval_ms = 16
        "#;
        let config = CourierConfig::from_toml_str(raw).unwrap();
        assert_eq!(config.agent.cache_name, "lms-v7");
        assert_eq!(config.progress.tick_interval_ms, 16);
        assert_eq!(config.progress.ceiling, 80.0);
    }

    #[test]
    fn zero_tick_is_rejected() {
        let err = CourierConfig::from_toml_str("[progress]\ntick_interval_ms = 0").unwrap_err();
        assert!(matches!(err, CourierError::Config(msg) if msg.contains("tick_interval_ms")));
    }

    #[test]
    fn unordered_thresholds_are_rejected() {
        let config = ProgressConfig {
            decelerate_until: 90.0,
            ..ProgressConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn malformed_toml_is_a_config_error() {
        let err = CourierConfig::from_toml_str("[progress\n").unwrap_err();
        assert!(matches!(err, CourierError::Config(_)));
    }
}
