pub mod settings;

pub use settings::{ClassificationWeights, Config, ConfigError, SimulationConfig, UiConfig};
