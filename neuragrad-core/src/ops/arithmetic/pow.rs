// neuragrad-core/src/ops/arithmetic/pow.rs

use crate::autograd::{Graph, NodeId, Op};
use crate::error::NeuraGradError;

impl Graph {
    /// Raises `a` to a constant power: `a ** exponent`.
    ///
    /// The exponent is a plain number, not a node, and receives no gradient.
    ///
    /// Backward: `grad_a += grad_out * exponent * a ** (exponent - 1)`.
    pub fn pow(&mut self, a: NodeId, exponent: f64) -> Result<NodeId, NeuraGradError> {
        let a_value = self.value(a)?;
        Ok(self.push(a_value.powf(exponent), Op::Pow(a, exponent)))
    }
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
