// neuragrad-core/src/ops/arithmetic/neg.rs

use crate::autograd::{Graph, NodeId};
use crate::error::NeuraGradError;

impl Graph {
    /// Negates a scalar. Built as `a * -1`, so it inherits the `Mul` rule and
    /// adds a constant leaf to the graph.
    pub fn neg(&mut self, a: NodeId) -> Result<NodeId, NeuraGradError> {
        self.mul(a, -1.0)
    }
}

#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
