pub mod circuit;
pub mod component;
pub mod connector;
pub mod gate;

pub use circuit::Circuit;
pub use component::{BinaryGate, BinaryInputs, LogicGate, UnaryGate};
pub use connector::{Connector, ConnectorId};
pub use gate::{Gate, GateId, GateKind, Inputs, Port, Slot};
