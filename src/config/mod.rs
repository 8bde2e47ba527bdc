pub mod circuit_config;
pub mod digcircuit_config;
pub mod scenario_config;

pub use digcircuit_config::DigcircuitConfig;
