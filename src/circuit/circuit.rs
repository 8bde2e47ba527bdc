use log::{debug, trace, warn};

use super::component::{BinaryGate, LogicGate, UnaryGate};
use super::connector::{Connector, ConnectorId};
use super::gate::{Gate, GateId, GateKind, Inputs, Port, Slot};
use crate::error::{CircuitError, Result};
use crate::level::LogicLevel;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mark {
    Unvisited,
    OnPath,
    Done,
}

/// Arena owning every gate and connector of one combinational circuit.
///
/// Evaluation is pull based: `output` resolves each connected input by
/// evaluating the upstream gate first, all the way back to directly set
/// inputs. Nothing is memoized between calls.
///
/// The circuit must be acyclic in the pull direction. Cycles are not rejected
/// while wiring; evaluating one recurses without bound unless cycle detection
/// is switched on, in which case evaluation panics at the first gate that is
/// re-entered.
#[derive(Clone, Debug, Default)]
pub struct Circuit {
    gates: Vec<Gate>,
    connectors: Vec<Connector>,
    detect_cycles: bool,
    evaluating: Vec<GateId>,
}

impl Circuit {
    pub fn new() -> Self {
        Circuit::default()
    }

    pub fn with_cycle_detection() -> Self {
        Circuit {
            detect_cycles: true,
            ..Circuit::default()
        }
    }

    pub fn set_cycle_detection(&mut self, enabled: bool) {
        self.detect_cycles = enabled;
    }

    pub fn detects_cycles(&self) -> bool {
        self.detect_cycles
    }

    // ==================== Construction ====================

    pub fn not_gate(&mut self, label: impl Into<String>) -> UnaryGate {
        UnaryGate::from_id(self.add_gate(label.into(), GateKind::Not))
    }

    pub fn and_gate(&mut self, label: impl Into<String>) -> BinaryGate {
        BinaryGate::from_id(self.add_gate(label.into(), GateKind::And))
    }

    pub fn or_gate(&mut self, label: impl Into<String>) -> BinaryGate {
        BinaryGate::from_id(self.add_gate(label.into(), GateKind::Or))
    }

    fn add_gate(&mut self, label: String, kind: GateKind) -> GateId {
        let id = GateId(self.gates.len());
        debug!("Adding {:?} gate `{}` as #{}", kind, label, id.0);
        self.gates.push(Gate::new(label, kind));
        id
    }

    /// Wire the output of `from` into a free input of `to`.
    ///
    /// The destination picks the slot: its only slot if unary, otherwise `a`
    /// and then `b`. If no slot is free nothing is recorded and
    /// `NoFreeInput` is returned.
    pub fn connect<G: LogicGate + ?Sized>(
        &mut self,
        from: &G,
        to: impl Into<GateId>,
    ) -> Result<ConnectorId> {
        let source = from.output_pin();
        let destination = to.into();

        let gate = &self.gates[destination.0];
        let port = gate
            .inputs()
            .free_port()
            .ok_or_else(|| CircuitError::NoFreeInput {
                label: gate.label().to_string(),
            })?;

        let id = ConnectorId(self.connectors.len());
        self.connectors.push(Connector::new(source, destination, port));
        self.gates[destination.0].claim(port, id);

        debug!(
            "Connected `{}` -> `{}` (slot {})",
            self.gates[source.0].label(),
            self.gates[destination.0].label(),
            port
        );

        Ok(id)
    }

    // ==================== Inspection ====================

    /// Panics if `id` does not belong to this circuit.
    pub fn gate(&self, id: GateId) -> &Gate {
        &self.gates[id.0]
    }

    pub fn label(&self, id: GateId) -> &str {
        self.gates[id.0].label()
    }

    pub fn kind(&self, id: GateId) -> GateKind {
        self.gates[id.0].kind()
    }

    pub fn last_output(&self, id: GateId) -> Option<LogicLevel> {
        self.gates[id.0].last_output()
    }

    pub fn connector(&self, id: ConnectorId) -> &Connector {
        &self.connectors[id.0]
    }

    pub fn connectors(&self) -> impl Iterator<Item = &Connector> {
        self.connectors.iter()
    }

    pub fn gate_count(&self) -> usize {
        self.gates.len()
    }

    pub fn connector_count(&self) -> usize {
        self.connectors.len()
    }

    // ==================== Inputs ====================

    /// Write already validated levels into the slots of `id`, in port order.
    /// `None` leaves a slot unchanged. Values for connector-claimed slots are
    /// dropped.
    pub(crate) fn set_levels(&mut self, id: GateId, levels: &[Option<LogicLevel>]) {
        let gate = &mut self.gates[id.0];
        let ports = gate.inputs().ports();
        assert_eq!(
            ports.len(),
            levels.len(),
            "gate `{}` has {} input(s)",
            gate.label(),
            ports.len()
        );

        for (port, level) in ports.iter().zip(levels) {
            if let Some(level) = level {
                if !gate.set_direct(*port, *level) {
                    warn!(
                        "Ignoring value {} for connected slot {} of gate `{}`",
                        level,
                        port,
                        gate.label()
                    );
                }
            }
        }
    }

    /// Validate raw values, then apply them. Values for connector-claimed
    /// slots are dropped unchecked. Nothing is written if any value meant for
    /// a free slot is not a logic level.
    pub(crate) fn set_inputs(&mut self, id: GateId, values: &[Option<i64>]) -> Result<()> {
        let gate = &self.gates[id.0];
        let inputs = gate.inputs();
        let levels = inputs
            .ports()
            .iter()
            .zip(values)
            .map(|(port, value)| match (inputs.slot(*port), value) {
                (Some(Slot::Connected(_)), Some(value)) => {
                    warn!(
                        "Ignoring value {} for connected slot {} of gate `{}`",
                        value,
                        port,
                        gate.label()
                    );
                    Ok(None)
                }
                (_, value) => value.map(LogicLevel::try_from).transpose(),
            })
            .collect::<Result<Vec<Option<LogicLevel>>>>()?;

        self.set_levels(id, &levels);
        Ok(())
    }

    // ==================== Evaluation ====================

    /// Recompute the output of `id`, pulling every connected input through
    /// its upstream gates first.
    ///
    /// Panics if an input slot was never set nor connected.
    pub fn output(&mut self, id: GateId) -> LogicLevel {
        if self.detect_cycles {
            if self.evaluating.contains(&id) {
                panic!(
                    "combinational loop detected at gate `{}`",
                    self.gates[id.0].label()
                );
            }
            self.evaluating.push(id);
        }

        let gate = &self.gates[id.0];
        let kind = gate.kind();
        let result = match gate.inputs() {
            Inputs::Unary(slot) => {
                let input = self.resolve(id, Port::Input, slot);
                let result = kind.compute(&[input]);
                trace!("{:?} `{}` ({}) -> {}", kind, self.gates[id.0].label(), input, result);
                result
            }
            Inputs::Binary { a, b } => {
                let a = self.resolve(id, Port::A, a);
                let b = self.resolve(id, Port::B, b);
                let result = kind.compute(&[a, b]);
                trace!("{:?} `{}` ({}, {}) -> {}", kind, self.gates[id.0].label(), a, b, result);
                result
            }
        };

        if self.detect_cycles {
            self.evaluating.pop();
        }

        self.gates[id.0].store_output(result);
        result
    }

    fn resolve(&mut self, id: GateId, port: Port, slot: Slot) -> LogicLevel {
        match slot {
            Slot::Connected(connector) => {
                let source = self.connectors[connector.0].source();
                self.output(source)
            }
            Slot::Direct(Some(level)) => level,
            Slot::Direct(None) => panic!(
                "input {} of gate `{}` was never set or connected",
                port,
                self.gates[id.0].label()
            ),
        }
    }

    /// Look for a loop in the pull direction. Returns the gates on the first
    /// loop found, each one fed by the next and the last fed by the first.
    pub fn find_cycle(&self) -> Option<Vec<GateId>> {
        let mut marks = vec![Mark::Unvisited; self.gates.len()];
        let mut path = Vec::new();

        for index in 0..self.gates.len() {
            if marks[index] == Mark::Unvisited {
                if let Some(cycle) = self.visit(GateId(index), &mut marks, &mut path) {
                    return Some(cycle);
                }
            }
        }
        None
    }

    fn visit(&self, id: GateId, marks: &mut [Mark], path: &mut Vec<GateId>) -> Option<Vec<GateId>> {
        marks[id.0] = Mark::OnPath;
        path.push(id);

        for source in self.upstream(id) {
            match marks[source.0] {
                Mark::OnPath => {
                    let start = path.iter().position(|gate| *gate == source)?;
                    return Some(path[start..].to_vec());
                }
                Mark::Unvisited => {
                    if let Some(cycle) = self.visit(source, marks, path) {
                        return Some(cycle);
                    }
                }
                Mark::Done => {}
            }
        }

        path.pop();
        marks[id.0] = Mark::Done;
        None
    }

    fn upstream(&self, id: GateId) -> Vec<GateId> {
        self.gates[id.0]
            .inputs()
            .slots()
            .into_iter()
            .filter_map(|(_, slot)| match slot {
                Slot::Connected(connector) => Some(self.connectors[connector.0].source()),
                Slot::Direct(_) => None,
            })
            .collect()
    }
}
