use serde::{Deserialize, Serialize};
use std::fs;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Classification weights must sum to 1.0, got {0:.3}")]
    WeightSum(f64),

    #[error("Classification weight '{0}' must not be negative")]
    NegativeWeight(&'static str),

    #[error("Setting '{0}' must be greater than zero")]
    ZeroSetting(&'static str),
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub simulation: SimulationConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct ClassificationWeights {
    pub normal: f64,
    pub malicious: f64,
    pub novel: f64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SimulationConfig {
    pub sample_interval_ms: u64,
    pub log_interval_ms: u64,
    pub flow_interval_ms: u64,
    pub metric_interval_ms: u64,
    pub sample_window: usize,
    pub log_history: usize,
    pub flow_count: usize,
    pub max_sample_volume: u32,
    pub weights: ClassificationWeights,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiConfig {
    pub refresh_rate_ms: u64,
    pub default_view: String,
    pub color_scheme: String,
}

impl Default for ClassificationWeights {
    fn default() -> Self {
        Self {
            normal: 0.6,
            malicious: 0.3,
            novel: 0.1,
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            sample_interval_ms: 2000,
            log_interval_ms: 1000,
            flow_interval_ms: 5000,
            metric_interval_ms: 2000,
            sample_window: 30,
            log_history: 100,
            flow_count: 50,
            max_sample_volume: 30,
            weights: ClassificationWeights::default(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            refresh_rate_ms: 100,
            default_view: "dashboard".to_string(),
            color_scheme: "dark".to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            simulation: SimulationConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let sim = &self.simulation;

        for (value, name) in [
            (sim.sample_interval_ms, "sample_interval_ms"),
            (sim.log_interval_ms, "log_interval_ms"),
            (sim.flow_interval_ms, "flow_interval_ms"),
            (sim.metric_interval_ms, "metric_interval_ms"),
            (sim.sample_window as u64, "sample_window"),
            (sim.log_history as u64, "log_history"),
            (sim.max_sample_volume as u64, "max_sample_volume"),
            (self.ui.refresh_rate_ms, "refresh_rate_ms"),
        ] {
            if value == 0 {
                return Err(ConfigError::ZeroSetting(name));
            }
        }

        let weights = &sim.weights;
        for (value, name) in [
            (weights.normal, "normal"),
            (weights.malicious, "malicious"),
            (weights.novel, "novel"),
        ] {
            if value < 0.0 {
                return Err(ConfigError::NegativeWeight(name));
            }
        }

        let sum = weights.normal + weights.malicious + weights.novel;
        if (sum - 1.0).abs() > 1e-6 {
            return Err(ConfigError::WeightSum(sum));
        }

        Ok(())
    }

    pub fn load_from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: &str) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_weight_sum_rejected() {
        let mut config = Config::default();
        config.simulation.weights.normal = 0.8;
        assert!(matches!(config.validate(), Err(ConfigError::WeightSum(_))));
    }

    #[test]
    fn test_negative_weight_rejected() {
        let mut config = Config::default();
        config.simulation.weights.novel = -0.1;
        config.simulation.weights.normal = 0.8;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NegativeWeight("novel"))
        ));
    }

    #[test]
    fn test_zero_interval_rejected() {
        let mut config = Config::default();
        config.simulation.log_interval_ms = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ZeroSetting("log_interval_ms"))
        ));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = Config::default();
        let serialized = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&serialized).unwrap();
        assert!(parsed.validate().is_ok());
        assert_eq!(parsed.simulation.sample_window, 30);
        assert_eq!(parsed.simulation.log_history, 100);
    }
}
