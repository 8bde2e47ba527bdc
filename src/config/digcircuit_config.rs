use std::str::FromStr;

use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat};
use config::builder::DefaultState;
use log::LevelFilter;
use serde::Deserialize;

use crate::config::circuit_config::CircuitConfig;
use crate::config::scenario_config::ScenarioConfig;

const MODES: [&str; 3] = ["scenario", "truth-tables", "all"];

#[derive(Debug, Deserialize)]
pub struct DigcircuitConfig {
    pub mode: String,
    pub log_level: String,
    #[serde(default)]
    pub circuit: CircuitConfig,
    #[serde(default)]
    pub scenario: ScenarioConfig,
}

impl DigcircuitConfig {
    /// Load `config/default` overridden by `DIGCIRCUIT_*` environment
    /// variables (nested keys use `__`, e.g. `DIGCIRCUIT_CIRCUIT__DETECT_CYCLES`).
    pub fn new() -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(File::with_name("config/default"))
            .add_source(
                Environment::with_prefix("digcircuit")
                    .prefix_separator("_")
                    .separator("__"),
            );

        DigcircuitConfig::build(builder)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        DigcircuitConfig::build(Config::builder().add_source(File::from_str(s, FileFormat::Toml)))
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let s = builder.build()?;
        let deserialized: DigcircuitConfig = s.try_deserialize()?;
        deserialized.validate()
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if !MODES.contains(&self.mode.as_str()) {
            return Err(ConfigError::Message(format!(
                "Mode must be one of {:?}, got '{}'",
                MODES, self.mode
            )));
        }

        LevelFilter::from_str(&self.log_level).map_err(|_| {
            ConfigError::Message(format!("Unknown log level '{}'", self.log_level))
        })?;

        for step in &self.scenario.steps {
            step.levels()?;
        }

        Ok(self)
    }

    pub fn log_level_filter(&self) -> LevelFilter {
        LevelFilter::from_str(&self.log_level).unwrap_or(LevelFilter::Info)
    }

    pub fn runs_scenario(&self) -> bool {
        self.mode == "scenario" || self.mode == "all"
    }

    pub fn runs_truth_tables(&self) -> bool {
        self.mode == "truth-tables" || self.mode == "all"
    }
}
