//! Gates assembled from primitives inside the same circuit. They expose the
//! same `LogicGate` / `BinaryInputs` contract as AND and OR.

pub mod xnor;
pub mod xor;

pub use xnor::XnorGate;
pub use xor::XorGate;
