use std::fmt;

use crate::circuit::{BinaryInputs, Circuit};
use crate::level::LogicLevel;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TruthRow {
    pub a: LogicLevel,
    pub b: LogicLevel,
    pub output: LogicLevel,
}

/// Output of a two-input component for every input combination.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TruthTable {
    label: String,
    rows: Vec<TruthRow>,
}

impl TruthTable {
    /// Drive `gate` through (0,0), (0,1), (1,0), (1,1). Leaves the gate's
    /// inputs at (1,1).
    pub fn of<G: BinaryInputs + ?Sized>(gate: &G, circuit: &mut Circuit) -> TruthTable {
        let levels = [LogicLevel::Low, LogicLevel::High];
        let mut rows = Vec::with_capacity(4);

        for a in levels {
            for b in levels {
                gate.set_levels(circuit, Some(a), Some(b));
                let output = gate.output(circuit);
                rows.push(TruthRow { a, b, output });
            }
        }

        TruthTable {
            label: gate.label(circuit).to_string(),
            rows,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn rows(&self) -> &[TruthRow] {
        &self.rows
    }

    pub fn output_for(&self, a: LogicLevel, b: LogicLevel) -> Option<LogicLevel> {
        self.rows
            .iter()
            .find(|row| row.a == a && row.b == b)
            .map(|row| row.output)
    }
}

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.label)?;
        writeln!(f, "a b | out")?;
        for row in &self.rows {
            writeln!(f, "{} {} | {}", row.a, row.b, row.output)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod truth_table_tests {
    use super::*;
    use crate::common::*;
    use crate::composite::{XnorGate, XorGate};
    use crate::level::LogicLevel::*;

    #[test]
    fn primitive_tables_test() {
        setup();
        let mut circuit = Circuit::new();
        let and = circuit.and_gate("and");
        let or = circuit.or_gate("or");

        let and_table = TruthTable::of(&and, &mut circuit);
        let or_table = TruthTable::of(&or, &mut circuit);

        let and_outputs: Vec<LogicLevel> = and_table.rows().iter().map(|r| r.output).collect();
        let or_outputs: Vec<LogicLevel> = or_table.rows().iter().map(|r| r.output).collect();
        assert_eq!(and_outputs, vec![Low, Low, Low, High]);
        assert_eq!(or_outputs, vec![Low, High, High, High]);
    }

    #[test]
    fn composite_tables_test() {
        let mut circuit = Circuit::new();
        let xor = XorGate::new(&mut circuit, "xor").unwrap();
        let xnor = XnorGate::new(&mut circuit, "xnor").unwrap();

        let xor_table = TruthTable::of(&xor, &mut circuit);
        let xnor_table = TruthTable::of(&xnor, &mut circuit);

        for row in xor_table.rows() {
            assert_eq!(row.output, LogicLevel::from(row.a != row.b));
            assert_eq!(xnor_table.output_for(row.a, row.b), Some(!row.output));
        }
        assert_eq!(xnor_table.label(), "xnor");
    }

    #[test]
    fn display_test() {
        let mut circuit = Circuit::new();
        let or = circuit.or_gate("or");
        let table = TruthTable::of(&or, &mut circuit);

        assert_eq!(
            table.to_string(),
            "or\na b | out\n0 0 | 0\n0 1 | 1\n1 0 | 1\n1 1 | 1\n"
        );
    }
}
