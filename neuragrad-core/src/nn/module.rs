use crate::autograd::{Graph, NodeId};
use crate::error::NeuraGradError;

/// The base trait for all neural network modules (neurons, layers, MLPs).
///
/// Modules do not own any node: their parameters are leaves stored in the
/// [`Graph`] passed to the constructor, and the module only remembers their
/// ids. The same graph must be passed to every call.
pub trait Module: std::fmt::Debug {
    /// What a forward pass returns: a single node or one node per unit.
    type Output;

    /// Performs a forward pass of the module.
    ///
    /// # Arguments
    /// * `graph`: The graph that owns the parameters and receives the new nodes.
    /// * `input`: One node per input feature.
    ///
    /// # Errors
    /// `DimensionMismatch` if `input` does not have the width the module was
    /// built for. The check happens before any node is pushed.
    fn forward(&self, graph: &mut Graph, input: &[NodeId]) -> Result<Self::Output, NeuraGradError>;

    /// Returns the ids of all learnable parameters, including those of
    /// sub-modules, in a stable order.
    fn parameters(&self) -> Vec<NodeId>;

    /// Resets the gradient of every parameter to zero.
    fn zero_grad(&self, graph: &mut Graph) -> Result<(), NeuraGradError> {
        graph.zero_grad(&self.parameters())
    }
}

/// Fails with `DimensionMismatch` unless `input` has exactly `expected` entries.
pub(crate) fn check_width(
    input: &[NodeId],
    expected: usize,
    operation: &str,
) -> Result<(), NeuraGradError> {
    if input.len() != expected {
        return Err(NeuraGradError::DimensionMismatch {
            expected,
            actual: input.len(),
            operation: operation.to_string(),
        });
    }
    Ok(())
}
