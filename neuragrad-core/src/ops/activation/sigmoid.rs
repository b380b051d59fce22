// neuragrad-core/src/ops/activation/sigmoid.rs

use crate::autograd::{Graph, NodeId, Op};
use crate::error::NeuraGradError;

impl Graph {
    /// Logistic sigmoid: `1 / (1 + exp(-a))`.
    ///
    /// Backward: `grad_a += grad_out * s * (1 - s)` with `s` the stored output.
    pub fn sigmoid(&mut self, a: NodeId) -> Result<NodeId, NeuraGradError> {
        let a_value = self.value(a)?;
        let value = 1.0 / (1.0 + (-a_value).exp());
        Ok(self.push(value, Op::Sigmoid(a)))
    }
}
