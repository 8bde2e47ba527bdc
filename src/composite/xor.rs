use log::debug;

use crate::circuit::{BinaryGate, BinaryInputs, Circuit, ConnectorId, GateId, LogicGate, UnaryGate};
use crate::error::Result;
use crate::level::LogicLevel;

/// XOR built from primitives: `(!a & b) | (!b & a)`.
///
/// ```text
/// a ──> not_a ──> and_1.a ──┐
/// b ─────────────> and_1.b  ├─> or
/// b ──> not_b ──> and_2.a   │
/// a ─────────────> and_2.b ─┘
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct XorGate {
    label: String,
    not_a: UnaryGate,
    not_b: UnaryGate,
    and_1: BinaryGate,
    and_2: BinaryGate,
    or: BinaryGate,
    not_a_to_and_1: ConnectorId,
    not_b_to_and_2: ConnectorId,
    and_1_to_or: ConnectorId,
    and_2_to_or: ConnectorId,
}

impl XorGate {
    pub fn new(circuit: &mut Circuit, label: impl Into<String>) -> Result<XorGate> {
        let label = label.into();

        let not_a = circuit.not_gate(format!("{}.not_a", label));
        let not_b = circuit.not_gate(format!("{}.not_b", label));
        let and_1 = circuit.and_gate(format!("{}.and_1", label));
        let and_2 = circuit.and_gate(format!("{}.and_2", label));
        let or = circuit.or_gate(format!("{}.or", label));

        // Claims slot a of each AND, leaving b for the direct inputs
        let not_a_to_and_1 = circuit.connect(&not_a, and_1)?;
        let not_b_to_and_2 = circuit.connect(&not_b, and_2)?;
        let and_1_to_or = circuit.connect(&and_1, or)?;
        let and_2_to_or = circuit.connect(&and_2, or)?;

        debug!("Built XOR `{}`", label);

        Ok(XorGate {
            label,
            not_a,
            not_b,
            and_1,
            and_2,
            or,
            not_a_to_and_1,
            not_b_to_and_2,
            and_1_to_or,
            and_2_to_or,
        })
    }

    /// Internal gates in construction order.
    pub fn gates(&self) -> [GateId; 5] {
        [
            self.not_a.id(),
            self.not_b.id(),
            self.and_1.id(),
            self.and_2.id(),
            self.or.id(),
        ]
    }

    /// Internal connectors in construction order.
    pub fn connectors(&self) -> [ConnectorId; 4] {
        [
            self.not_a_to_and_1,
            self.not_b_to_and_2,
            self.and_1_to_or,
            self.and_2_to_or,
        ]
    }
}

impl LogicGate for XorGate {
    fn label<'a>(&'a self, _circuit: &'a Circuit) -> &'a str {
        &self.label
    }

    fn output_pin(&self) -> GateId {
        self.or.id()
    }
}

impl BinaryInputs for XorGate {
    fn set_levels(&self, circuit: &mut Circuit, a: Option<LogicLevel>, b: Option<LogicLevel>) {
        if let Some(a) = a {
            self.not_a.set_level(circuit, a);
            self.and_2.set_levels(circuit, None, Some(a));
        }
        if let Some(b) = b {
            self.not_b.set_level(circuit, b);
            self.and_1.set_levels(circuit, None, Some(b));
        }
    }
}

#[cfg(test)]
mod xor_tests {
    use rand::prelude::*;

    use super::*;
    use crate::circuit::Port;
    use crate::common::*;
    use crate::level::LogicLevel::*;

    #[test]
    fn truth_table_test() {
        setup();
        let mut circuit = Circuit::new();
        let xor = XorGate::new(&mut circuit, "xor").unwrap();

        xor.set_inputs(&mut circuit, Some(1), Some(1)).unwrap();
        assert_eq!(xor.output(&mut circuit), Low);
        xor.set_inputs(&mut circuit, Some(1), Some(0)).unwrap();
        assert_eq!(xor.output(&mut circuit), High);
        xor.set_inputs(&mut circuit, Some(0), Some(1)).unwrap();
        assert_eq!(xor.output(&mut circuit), High);
        xor.set_inputs(&mut circuit, Some(0), Some(0)).unwrap();
        assert_eq!(xor.output(&mut circuit), Low);
        xor.set_inputs(&mut circuit, Some(1), Some(1)).unwrap();
        assert_eq!(xor.output(&mut circuit), Low);
    }

    #[test]
    fn internal_wiring_test() {
        let mut circuit = Circuit::new();
        let xor = XorGate::new(&mut circuit, "x").unwrap();

        assert_eq!(xor.label(&circuit), "x");
        assert_eq!(circuit.gate_count(), 5);
        assert_eq!(circuit.connector_count(), 4);
        assert_eq!(circuit.label(xor.output_pin()), "x.or");
        assert_eq!(xor.gates()[4], xor.output_pin());
        assert_eq!(circuit.label(xor.gates()[0]), "x.not_a");

        let [not_a_to_and_1, not_b_to_and_2, and_1_to_or, and_2_to_or] = xor.connectors();
        assert_eq!(circuit.connector(not_a_to_and_1).port(), Port::A);
        assert_eq!(circuit.connector(not_b_to_and_2).port(), Port::A);
        assert_eq!(circuit.connector(and_1_to_or).port(), Port::A);
        assert_eq!(circuit.connector(and_2_to_or).port(), Port::B);
        assert_eq!(circuit.connector(and_2_to_or).destination(), xor.output_pin());
        assert_eq!(circuit.find_cycle(), None);
    }

    #[test]
    fn invalid_input_applies_nothing_test() {
        let mut circuit = Circuit::new();
        let xor = XorGate::new(&mut circuit, "xor").unwrap();
        xor.set_inputs(&mut circuit, Some(1), Some(0)).unwrap();

        assert!(xor.set_inputs(&mut circuit, Some(0), Some(5)).is_err());
        assert_eq!(xor.output(&mut circuit), High);
    }

    #[test]
    fn xor_drives_a_connector_test() {
        let mut circuit = Circuit::new();
        let xor = XorGate::new(&mut circuit, "xor").unwrap();
        let and = circuit.and_gate("and");
        circuit.connect(&xor, and).unwrap();

        xor.set_inputs(&mut circuit, Some(0), Some(1)).unwrap();
        and.set_inputs(&mut circuit, None, Some(1)).unwrap();
        assert_eq!(and.output(&mut circuit), High);

        xor.set_inputs(&mut circuit, Some(1), None).unwrap();
        assert_eq!(and.output(&mut circuit), Low);
    }

    #[test]
    fn random_inputs_match_reference_test() {
        setup();
        let mut rng = StdRng::seed_from_u64(42);
        let mut circuit = Circuit::new();
        let xor = XorGate::new(&mut circuit, "xor").unwrap();

        let mut a: bool = rng.gen();
        let mut b: bool = rng.gen();
        xor.set_inputs(&mut circuit, Some(a as i64), Some(b as i64)).unwrap();

        for _ in 0..200 {
            // Omitted inputs keep their previous value
            let new_a = if rng.gen_bool(0.5) { Some(rng.gen::<bool>()) } else { None };
            let new_b = if rng.gen_bool(0.5) { Some(rng.gen::<bool>()) } else { None };
            a = new_a.unwrap_or(a);
            b = new_b.unwrap_or(b);

            xor.set_inputs(
                &mut circuit,
                new_a.map(|v| v as i64),
                new_b.map(|v| v as i64),
            )
            .unwrap();

            assert_eq!(xor.output(&mut circuit), LogicLevel::from(a ^ b));
        }
    }
}
