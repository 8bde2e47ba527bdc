use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct CircuitConfig {
    /// Unset means on for debug builds, off for release builds
    pub detect_cycles: Option<bool>,
}

impl CircuitConfig {
    pub fn detect_cycles(&self) -> bool {
        self.detect_cycles.unwrap_or(cfg!(debug_assertions))
    }
}
