use crate::circuit::gate::{GateId, Port};

/// Index of a connector inside its `Circuit`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConnectorId(pub(crate) usize);

impl ConnectorId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Directed wire from the output of `source` into one input slot of
/// `destination`. Holds handles only; both gates are owned by the circuit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Connector {
    source: GateId,
    destination: GateId,
    port: Port,
}

impl Connector {
    pub(crate) fn new(source: GateId, destination: GateId, port: Port) -> Self {
        Connector {
            source,
            destination,
            port,
        }
    }

    pub fn source(&self) -> GateId {
        self.source
    }

    pub fn destination(&self) -> GateId {
        self.destination
    }

    /// The destination slot this connector claimed.
    pub fn port(&self) -> Port {
        self.port
    }
}
