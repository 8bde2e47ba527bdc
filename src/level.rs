use std::fmt;
use std::ops::Not;

use serde_json::Value;

use crate::error::{CircuitError, Result};

/// One of the two discrete values a wire can carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum LogicLevel {
    Low = 0,
    High = 1,
}

impl LogicLevel {
    /// Validate an untyped value. Only the integers 0 and 1 are accepted:
    /// floats, strings, booleans and null are all rejected.
    pub fn validate(value: &Value) -> Result<LogicLevel> {
        match value.as_i64() {
            Some(raw) => LogicLevel::try_from(raw),
            None => Err(CircuitError::InvalidLevel {
                value: value.to_string(),
            }),
        }
    }

    pub fn is_high(self) -> bool {
        self == LogicLevel::High
    }
}

impl TryFrom<i64> for LogicLevel {
    type Error = CircuitError;

    fn try_from(value: i64) -> Result<Self> {
        match value {
            0 => Ok(LogicLevel::Low),
            1 => Ok(LogicLevel::High),
            _ => Err(CircuitError::InvalidLevel {
                value: value.to_string(),
            }),
        }
    }
}

impl TryFrom<u8> for LogicLevel {
    type Error = CircuitError;

    fn try_from(value: u8) -> Result<Self> {
        LogicLevel::try_from(value as i64)
    }
}

impl From<bool> for LogicLevel {
    fn from(value: bool) -> Self {
        if value {
            LogicLevel::High
        } else {
            LogicLevel::Low
        }
    }
}

impl From<LogicLevel> for bool {
    fn from(level: LogicLevel) -> Self {
        level.is_high()
    }
}

impl From<LogicLevel> for u8 {
    fn from(level: LogicLevel) -> Self {
        level as u8
    }
}

impl Not for LogicLevel {
    type Output = LogicLevel;

    fn not(self) -> LogicLevel {
        match self {
            LogicLevel::Low => LogicLevel::High,
            LogicLevel::High => LogicLevel::Low,
        }
    }
}

impl fmt::Display for LogicLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", *self as u8)
    }
}
