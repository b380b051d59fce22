// neuragrad-core/src/ops/activation/relu.rs

use crate::autograd::{Graph, NodeId, Op};
use crate::error::NeuraGradError;

impl Graph {
    /// Rectified linear unit: `a` if `a > 0`, else `0`.
    ///
    /// Backward: the upstream gradient passes through only when `a > 0`;
    /// the gradient at exactly zero is zero.
    pub fn relu(&mut self, a: NodeId) -> Result<NodeId, NeuraGradError> {
        let a_value = self.value(a)?;
        let value = if a_value > 0.0 { a_value } else { 0.0 };
        Ok(self.push(value, Op::Relu(a)))
    }
}

#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
