//! Combinational logic circuits evaluated on demand.
//!
//! Gates live in a [`Circuit`] arena and are wired with connectors. Asking a
//! gate for its output walks backwards through every connected input, so the
//! result always reflects the current inputs of the whole upstream graph.
//!
//! ```
//! use digcircuit::{BinaryInputs, Circuit, LogicGate, LogicLevel};
//!
//! let mut circuit = Circuit::new();
//! let and = circuit.and_gate("and");
//! let not = circuit.not_gate("not");
//! circuit.connect(&and, not).unwrap();
//!
//! and.set_inputs(&mut circuit, Some(1), Some(1)).unwrap();
//! assert_eq!(not.output(&mut circuit), LogicLevel::Low);
//! ```

pub mod circuit;
pub mod common;
pub mod composite;
pub mod config;
pub mod error;
pub mod level;
pub mod truth_table;

pub use circuit::{
    BinaryGate, BinaryInputs, Circuit, Connector, ConnectorId, GateId, GateKind, LogicGate, Port,
    UnaryGate,
};
pub use composite::{XnorGate, XorGate};
pub use error::{CircuitError, Result};
pub use level::LogicLevel;
pub use truth_table::TruthTable;
