// neuragrad-core/src/ops/arithmetic/mul.rs

use crate::autograd::{Graph, NodeId, Op};
use crate::error::NeuraGradError;
use crate::ops::Operand;

impl Graph {
    /// Multiplies two scalars: `a * b`.
    ///
    /// `b` may be a node or a plain number (lifted into a leaf).
    ///
    /// Backward: `grad_a += grad_out * b`, `grad_b += grad_out * a`.
    pub fn mul(&mut self, a: NodeId, b: impl Into<Operand>) -> Result<NodeId, NeuraGradError> {
        let a_value = self.value(a)?;
        let b = self.resolve(b.into())?;
        let b_value = self.value(b)?;
        Ok(self.push(a_value * b_value, Op::Mul(a, b)))
    }
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
