//! The contract shared by primitive and composite gates.
//!
//! Handles are small `Copy` values; all state lives in the `Circuit` passed
//! to each call. Anything implementing `LogicGate` can drive a connector, so a
//! composite can stand wherever a primitive gate is expected as a source.

use crate::circuit::circuit::Circuit;
use crate::circuit::gate::GateId;
use crate::error::Result;
use crate::level::LogicLevel;

pub trait LogicGate {
    fn label<'a>(&'a self, circuit: &'a Circuit) -> &'a str;

    /// The primitive gate whose output is this component's output.
    fn output_pin(&self) -> GateId;

    /// Recompute and return the output.
    fn output(&self, circuit: &mut Circuit) -> LogicLevel {
        circuit.output(self.output_pin())
    }
}

/// Components driven by two external inputs `a` and `b`.
pub trait BinaryInputs: LogicGate {
    /// Apply already validated levels. `None` leaves the input unchanged.
    fn set_levels(&self, circuit: &mut Circuit, a: Option<LogicLevel>, b: Option<LogicLevel>);

    /// Validate and apply raw inputs. `None` omits an input and is never an
    /// error. If any provided value is invalid nothing is applied.
    fn set_inputs(&self, circuit: &mut Circuit, a: Option<i64>, b: Option<i64>) -> Result<()> {
        let a = a.map(LogicLevel::try_from).transpose()?;
        let b = b.map(LogicLevel::try_from).transpose()?;
        self.set_levels(circuit, a, b);
        Ok(())
    }
}

impl LogicGate for GateId {
    fn label<'a>(&'a self, circuit: &'a Circuit) -> &'a str {
        circuit.label(*self)
    }

    fn output_pin(&self) -> GateId {
        *self
    }
}

/// Handle to a single-input primitive (NOT).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct UnaryGate(GateId);

impl UnaryGate {
    pub(crate) fn from_id(id: GateId) -> Self {
        UnaryGate(id)
    }

    pub fn id(&self) -> GateId {
        self.0
    }

    /// Validate and set the input. Ignored if the slot is connected.
    pub fn set_input(&self, circuit: &mut Circuit, value: i64) -> Result<()> {
        circuit.set_inputs(self.0, &[Some(value)])
    }

    pub fn set_level(&self, circuit: &mut Circuit, level: LogicLevel) {
        circuit.set_levels(self.0, &[Some(level)]);
    }
}

impl LogicGate for UnaryGate {
    fn label<'a>(&'a self, circuit: &'a Circuit) -> &'a str {
        circuit.label(self.0)
    }

    fn output_pin(&self) -> GateId {
        self.0
    }
}

impl From<UnaryGate> for GateId {
    fn from(gate: UnaryGate) -> Self {
        gate.0
    }
}

/// Handle to a two-input primitive (AND, OR).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BinaryGate(GateId);

impl BinaryGate {
    pub(crate) fn from_id(id: GateId) -> Self {
        BinaryGate(id)
    }

    pub fn id(&self) -> GateId {
        self.0
    }
}

impl LogicGate for BinaryGate {
    fn label<'a>(&'a self, circuit: &'a Circuit) -> &'a str {
        circuit.label(self.0)
    }

    fn output_pin(&self) -> GateId {
        self.0
    }
}

impl BinaryInputs for BinaryGate {
    fn set_levels(&self, circuit: &mut Circuit, a: Option<LogicLevel>, b: Option<LogicLevel>) {
        circuit.set_levels(self.0, &[a, b]);
    }

    fn set_inputs(&self, circuit: &mut Circuit, a: Option<i64>, b: Option<i64>) -> Result<()> {
        circuit.set_inputs(self.0, &[a, b])
    }
}

impl From<BinaryGate> for GateId {
    fn from(gate: BinaryGate) -> Self {
        gate.0
    }
}

#[cfg(test)]
mod component_tests {
    use super::*;
    use crate::circuit::gate::GateKind;
    use crate::common::*;
    use crate::level::LogicLevel::*;

    #[test]
    fn handles_expose_label_and_kind_test() {
        setup();
        let mut circuit = Circuit::new();
        let not = circuit.not_gate("inverter");
        let or = circuit.or_gate("either");

        assert_eq!(not.label(&circuit), "inverter");
        assert_eq!(or.label(&circuit), "either");
        assert_eq!(or.id().label(&circuit), "either");
        assert_eq!(circuit.kind(not.id()), GateKind::Not);
        assert_eq!(circuit.kind(or.id()), GateKind::Or);
        assert_eq!(circuit.gate_count(), 2);
    }

    #[test]
    fn labels_need_not_be_unique_test() {
        let mut circuit = Circuit::new();
        let first = circuit.and_gate("same");
        let second = circuit.and_gate("same");

        assert_ne!(first.id(), second.id());
        assert_eq!(first.label(&circuit), second.label(&circuit));
    }

    #[test]
    fn typed_levels_test() {
        let mut circuit = Circuit::new();
        let not = circuit.not_gate("not");
        let and = circuit.and_gate("and");

        not.set_level(&mut circuit, High);
        and.set_levels(&mut circuit, Some(High), Some(High));

        assert_eq!(not.output(&mut circuit), Low);
        assert_eq!(and.output(&mut circuit), High);
    }

    #[test]
    fn unary_invalid_input_keeps_previous_value_test() {
        let mut circuit = Circuit::new();
        let not = circuit.not_gate("not");
        not.set_input(&mut circuit, 1).unwrap();

        assert!(not.set_input(&mut circuit, 3).is_err());
        assert_eq!(not.output(&mut circuit), Low);
    }

    #[test]
    fn gate_id_is_a_gate_test() {
        let mut circuit = Circuit::new();
        let and = circuit.and_gate("and");
        and.set_inputs(&mut circuit, Some(1), Some(0)).unwrap();

        let id: GateId = and.into();
        assert_eq!(id.output(&mut circuit), Low);
        assert_eq!(id.output_pin(), and.output_pin());
    }
}
