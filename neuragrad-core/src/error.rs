use thiserror::Error;

/// Custom error type for the NeuraGrad framework.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum NeuraGradError {
    #[error("Unknown node: index {index} is not part of this graph (graph holds {len} nodes)")]
    UnknownNode { index: usize, len: usize },

    #[error("Stale node: index {index} was created in generation {node_generation}, the slot now belongs to generation {slot_generation}")]
    StaleNode {
        index: usize,
        node_generation: u32,
        slot_generation: u32,
    },

    #[error("Node {index} is not a leaf; only leaf values can be overwritten")]
    NotALeaf { index: usize },

    #[error("Cycle detected in the computation graph: node {node} lists operand {operand}")]
    CycleDetected { node: usize, operand: usize },

    #[error("Dimension mismatch during {operation}: expected {expected}, got {actual}")]
    DimensionMismatch {
        expected: usize,
        actual: usize,
        operation: String,
    },

    #[error("Empty input for operation {operation}")]
    EmptyInput { operation: String },

    #[error("Unsupported activation function: {0:?}")]
    UnsupportedActivation(String),

    #[error("Unsupported loss function: {0:?}")]
    UnsupportedLoss(String),

    #[error("Invalid architecture: {0}")]
    InvalidArchitecture(String),

    #[error("Index out of bounds: index {index} for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}
