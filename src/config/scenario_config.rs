use config::ConfigError;
use serde::Deserialize;
use serde_json::Value;

use crate::level::LogicLevel;

/// Input vectors for the AND1/AND2 -> OR -> NOT demo circuit.
#[derive(Debug, Default, Deserialize)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub steps: Vec<ScenarioStep>,
}

/// Raw values as read from the config source. They are only trusted after
/// `levels` has validated them.
#[derive(Debug, Deserialize)]
pub struct ScenarioStep {
    pub and_1: Vec<Value>,
    pub and_2: Vec<Value>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepLevels {
    pub and_1: [LogicLevel; 2],
    pub and_2: [LogicLevel; 2],
}

impl ScenarioStep {
    pub fn levels(&self) -> Result<StepLevels, ConfigError> {
        Ok(StepLevels {
            and_1: pair("and_1", &self.and_1)?,
            and_2: pair("and_2", &self.and_2)?,
        })
    }
}

fn pair(name: &str, values: &[Value]) -> Result<[LogicLevel; 2], ConfigError> {
    let validate = |value: &Value| {
        LogicLevel::validate(value)
            .map_err(|err| ConfigError::Message(format!("Scenario input `{}`: {}", name, err)))
    };

    match values {
        [a, b] => Ok([validate(a)?, validate(b)?]),
        _ => Err(ConfigError::Message(format!(
            "Scenario input `{}` needs exactly two values, got {}",
            name,
            values.len()
        ))),
    }
}
