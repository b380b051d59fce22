// neuragrad-core/src/ops/activation/tanh.rs

use crate::autograd::{Graph, NodeId, Op};
use crate::error::NeuraGradError;

impl Graph {
    /// Hyperbolic tangent.
    ///
    /// Backward: `grad_a += grad_out * (1 - tanh(a)^2)`, computed from the
    /// stored output.
    pub fn tanh(&mut self, a: NodeId) -> Result<NodeId, NeuraGradError> {
        let a_value = self.value(a)?;
        Ok(self.push(a_value.tanh(), Op::Tanh(a)))
    }
}
