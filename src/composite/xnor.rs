use log::debug;

use super::xor::XorGate;
use crate::circuit::{BinaryInputs, Circuit, ConnectorId, GateId, LogicGate, UnaryGate};
use crate::error::Result;
use crate::level::LogicLevel;

/// XNOR: an internal XOR feeding a NOT.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct XnorGate {
    label: String,
    xor: XorGate,
    not: UnaryGate,
    xor_to_not: ConnectorId,
}

impl XnorGate {
    pub fn new(circuit: &mut Circuit, label: impl Into<String>) -> Result<XnorGate> {
        let label = label.into();

        let xor = XorGate::new(circuit, format!("{}.xor", label))?;
        let not = circuit.not_gate(format!("{}.not", label));
        let xor_to_not = circuit.connect(&xor, not)?;

        debug!("Built XNOR `{}`", label);

        Ok(XnorGate {
            label,
            xor,
            not,
            xor_to_not,
        })
    }

    pub fn xor(&self) -> &XorGate {
        &self.xor
    }

    pub fn connector(&self) -> ConnectorId {
        self.xor_to_not
    }
}

impl LogicGate for XnorGate {
    fn label<'a>(&'a self, _circuit: &'a Circuit) -> &'a str {
        &self.label
    }

    fn output_pin(&self) -> GateId {
        self.not.id()
    }
}

impl BinaryInputs for XnorGate {
    fn set_levels(&self, circuit: &mut Circuit, a: Option<LogicLevel>, b: Option<LogicLevel>) {
        self.xor.set_levels(circuit, a, b);
    }
}
