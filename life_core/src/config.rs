// config.rs - Tunables for the simulation and its hosts

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::grid::{Brush, RowEdges};

/// Static configuration shared by the engine and its hosts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifeConfig {
    /// Size of one cell in viewport pixels.
    pub resolution: f32,
    /// Number of recent generations checked for repeats.
    pub max_history_size: usize,
    /// Seconds that must pass after a reset before stagnation may restart again.
    pub restart_after_secs: f64,
    /// Half-width of the block splashed around a click.
    pub seed_radius: usize,
    /// Chance a cell starts alive, and chance a splashed cell is switched on.
    pub seed_probability: f64,
    /// Vertical edge behavior for neighbor counting.
    pub row_edges: RowEdges,
    /// Optional RNG seed for reproducible runs.
    pub rng_seed: Option<u64>,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            resolution: 10.0,
            max_history_size: 10,
            restart_after_secs: 10.0,
            seed_radius: 2,
            seed_probability: 0.5,
            row_edges: RowEdges::Clip,
            rng_seed: None,
        }
    }
}

impl LifeConfig {
    /// Reads a JSON config file; missing fields fall back to defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.resolution.is_finite() && self.resolution > 0.0) {
            return Err(ConfigError::ZeroResolution(self.resolution));
        }
        if self.max_history_size == 0 {
            return Err(ConfigError::ZeroHistory);
        }
        if Duration::try_from_secs_f64(self.restart_after_secs).is_err() {
            return Err(ConfigError::InvalidCooldown(self.restart_after_secs));
        }
        if !(0.0..=1.0).contains(&self.seed_probability) {
            return Err(ConfigError::InvalidSeedProbability(self.seed_probability));
        }
        Ok(())
    }

    pub fn restart_after(&self) -> Duration {
        Duration::try_from_secs_f64(self.restart_after_secs).unwrap_or(Duration::MAX)
    }

    pub fn brush(&self) -> Brush {
        Brush {
            radius: self.seed_radius,
            probability: self.seed_probability,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = LifeConfig::default();
        config.validate().unwrap();
        assert_eq!(config.restart_after(), Duration::from_secs(10));
        assert_eq!(config.brush(), Brush::default());
    }

    #[test]
    fn partial_json_fills_in_defaults() {
        let config: LifeConfig =
            serde_json::from_str(r#"{ "max_history_size": 4, "row_edges": "wrap" }"#).unwrap();
        assert_eq!(config.max_history_size, 4);
        assert_eq!(config.row_edges, RowEdges::Wrap);
        assert_eq!(config.resolution, 10.0);
    }

    #[test]
    fn rejects_bad_values() {
        let bad_resolution = LifeConfig { resolution: 0.0, ..LifeConfig::default() };
        assert!(matches!(bad_resolution.validate(), Err(ConfigError::ZeroResolution(_))));

        let bad_history = LifeConfig { max_history_size: 0, ..LifeConfig::default() };
        assert!(matches!(bad_history.validate(), Err(ConfigError::ZeroHistory)));

        let bad_cooldown = LifeConfig { restart_after_secs: f64::NAN, ..LifeConfig::default() };
        assert!(matches!(bad_cooldown.validate(), Err(ConfigError::InvalidCooldown(_))));

        let huge_cooldown = LifeConfig { restart_after_secs: 1e20, ..LifeConfig::default() };
        assert!(matches!(huge_cooldown.validate(), Err(ConfigError::InvalidCooldown(_))));

        let negative_cooldown = LifeConfig { restart_after_secs: -1.0, ..LifeConfig::default() };
        assert!(matches!(negative_cooldown.validate(), Err(ConfigError::InvalidCooldown(_))));

        let bad_probability = LifeConfig { seed_probability: 1.5, ..LifeConfig::default() };
        assert!(matches!(
            bad_probability.validate(),
            Err(ConfigError::InvalidSeedProbability(_))
        ));
    }

    #[test]
    fn load_reports_missing_file() {
        let err = LifeConfig::load("/nonexistent/life.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
