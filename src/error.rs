use thiserror::Error;

/// Errors a caller can trigger while wiring or driving a circuit.
///
/// Unset inputs and combinational loops are not represented here: they are
/// defects in how the circuit was built and abort evaluation with a panic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CircuitError {
    #[error("invalid logic level `{value}`: the input must be 0 or 1")]
    InvalidLevel { value: String },

    #[error("no free input available on gate `{label}`")]
    NoFreeInput { label: String },
}

pub type Result<T> = std::result::Result<T, CircuitError>;
