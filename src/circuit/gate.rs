use std::fmt;

use crate::circuit::connector::ConnectorId;
use crate::level::LogicLevel;

/// Index of a primitive gate inside its `Circuit`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GateId(pub(crate) usize);

impl GateId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Type of primitive gate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GateKind {
    Not,
    And,
    Or,
}

impl GateKind {
    /// Returns the number of input slots for this gate kind.
    pub fn arity(&self) -> usize {
        match self {
            GateKind::Not => 1,
            GateKind::And | GateKind::Or => 2,
        }
    }

    /// Apply the boolean function to fully resolved inputs.
    /// Panics if the number of inputs does not match the arity.
    pub fn compute(&self, inputs: &[LogicLevel]) -> LogicLevel {
        match (self, inputs) {
            (GateKind::Not, [input]) => !*input,
            (GateKind::And, [a, b]) => LogicLevel::from(a.is_high() && b.is_high()),
            (GateKind::Or, [a, b]) => LogicLevel::from(a.is_high() || b.is_high()),
            _ => panic!(
                "{:?} gate takes {} input(s), got {}",
                self,
                self.arity(),
                inputs.len()
            ),
        }
    }
}

/// Named input position on a gate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Port {
    /// The only slot of a unary gate
    Input,
    A,
    B,
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Port::Input => write!(f, "input"),
            Port::A => write!(f, "a"),
            Port::B => write!(f, "b"),
        }
    }
}

/// State of one input slot. A connected slot stays connected for the life of
/// the circuit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot {
    /// Last directly set value, `None` until the first set
    Direct(Option<LogicLevel>),
    Connected(ConnectorId),
}

impl Slot {
    pub fn is_connected(&self) -> bool {
        matches!(self, Slot::Connected(_))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Inputs {
    Unary(Slot),
    Binary { a: Slot, b: Slot },
}

impl Inputs {
    fn for_kind(kind: GateKind) -> Inputs {
        match kind.arity() {
            1 => Inputs::Unary(Slot::Direct(None)),
            _ => Inputs::Binary {
                a: Slot::Direct(None),
                b: Slot::Direct(None),
            },
        }
    }

    /// The slot a new connector would claim: the only slot of a unary gate,
    /// otherwise `a` before `b`. `None` when every slot is taken.
    pub fn free_port(&self) -> Option<Port> {
        match self {
            Inputs::Unary(slot) if !slot.is_connected() => Some(Port::Input),
            Inputs::Binary { a, .. } if !a.is_connected() => Some(Port::A),
            Inputs::Binary { b, .. } if !b.is_connected() => Some(Port::B),
            _ => None,
        }
    }

    pub fn slot(&self, port: Port) -> Option<Slot> {
        match (self, port) {
            (Inputs::Unary(slot), Port::Input) => Some(*slot),
            (Inputs::Binary { a, .. }, Port::A) => Some(*a),
            (Inputs::Binary { b, .. }, Port::B) => Some(*b),
            _ => None,
        }
    }

    fn slot_mut(&mut self, port: Port) -> Option<&mut Slot> {
        match (self, port) {
            (Inputs::Unary(slot), Port::Input) => Some(slot),
            (Inputs::Binary { a, .. }, Port::A) => Some(a),
            (Inputs::Binary { b, .. }, Port::B) => Some(b),
            _ => None,
        }
    }

    /// All slots in port order.
    pub fn slots(&self) -> Vec<(Port, Slot)> {
        match self {
            Inputs::Unary(slot) => vec![(Port::Input, *slot)],
            Inputs::Binary { a, b } => vec![(Port::A, *a), (Port::B, *b)],
        }
    }

    pub fn ports(&self) -> &'static [Port] {
        match self {
            Inputs::Unary(_) => &[Port::Input],
            Inputs::Binary { .. } => &[Port::A, Port::B],
        }
    }
}

/// A primitive gate as stored in the circuit arena.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Gate {
    label: String,
    kind: GateKind,
    inputs: Inputs,
    output: Option<LogicLevel>,
}

impl Gate {
    pub(crate) fn new(label: String, kind: GateKind) -> Self {
        Gate {
            label,
            kind,
            inputs: Inputs::for_kind(kind),
            output: None,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn kind(&self) -> GateKind {
        self.kind
    }

    pub fn inputs(&self) -> Inputs {
        self.inputs
    }

    /// Output of the most recent evaluation. Not refreshed by input changes.
    pub fn last_output(&self) -> Option<LogicLevel> {
        self.output
    }

    pub(crate) fn claim(&mut self, port: Port, connector: ConnectorId) {
        if let Some(slot) = self.inputs.slot_mut(port) {
            *slot = Slot::Connected(connector);
        }
    }

    /// Write a direct value into `port`. Returns false if the slot is
    /// connector-claimed and the value was dropped.
    pub(crate) fn set_direct(&mut self, port: Port, level: LogicLevel) -> bool {
        match self.inputs.slot_mut(port) {
            Some(Slot::Direct(value)) => {
                *value = Some(level);
                true
            }
            _ => false,
        }
    }

    pub(crate) fn store_output(&mut self, level: LogicLevel) {
        self.output = Some(level);
    }
}

#[cfg(test)]
mod gate_tests {
    use super::*;
    use crate::level::LogicLevel::*;

    #[test]
    fn compute_not_test() {
        assert_eq!(GateKind::Not.compute(&[Low]), High);
        assert_eq!(GateKind::Not.compute(&[High]), Low);
    }

    #[test]
    fn compute_and_test() {
        assert_eq!(GateKind::And.compute(&[High, High]), High);
        assert_eq!(GateKind::And.compute(&[High, Low]), Low);
        assert_eq!(GateKind::And.compute(&[Low, High]), Low);
        assert_eq!(GateKind::And.compute(&[Low, Low]), Low);
    }

    #[test]
    fn compute_or_test() {
        assert_eq!(GateKind::Or.compute(&[High, High]), High);
        assert_eq!(GateKind::Or.compute(&[High, Low]), High);
        assert_eq!(GateKind::Or.compute(&[Low, High]), High);
        assert_eq!(GateKind::Or.compute(&[Low, Low]), Low);
    }

    #[test]
    #[should_panic(expected = "takes 2 input(s)")]
    fn compute_wrong_arity_test() {
        GateKind::And.compute(&[High]);
    }

    #[test]
    fn free_port_order_test() {
        let mut gate = Gate::new("and".to_string(), GateKind::And);
        assert_eq!(gate.inputs().free_port(), Some(Port::A));

        gate.claim(Port::A, ConnectorId(0));
        assert_eq!(gate.inputs().free_port(), Some(Port::B));

        gate.claim(Port::B, ConnectorId(1));
        assert_eq!(gate.inputs().free_port(), None);

        let mut not = Gate::new("not".to_string(), GateKind::Not);
        assert_eq!(not.inputs().free_port(), Some(Port::Input));
        not.claim(Port::Input, ConnectorId(2));
        assert_eq!(not.inputs().free_port(), None);
    }

    #[test]
    fn set_direct_on_claimed_slot_test() {
        let mut gate = Gate::new("or".to_string(), GateKind::Or);
        gate.claim(Port::A, ConnectorId(0));

        assert!(!gate.set_direct(Port::A, High));
        assert!(gate.set_direct(Port::B, High));
        assert_eq!(gate.inputs().slot(Port::A), Some(Slot::Connected(ConnectorId(0))));
        assert_eq!(gate.inputs().slot(Port::B), Some(Slot::Direct(Some(High))));
    }

    #[test]
    fn fresh_gate_has_no_output_test() {
        let gate = Gate::new("not".to_string(), GateKind::Not);

        assert_eq!(gate.label(), "not");
        assert_eq!(gate.last_output(), None);
        assert_eq!(gate.inputs().slots(), vec![(Port::Input, Slot::Direct(None))]);
    }
}
