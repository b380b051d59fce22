// neuragrad-core/src/ops/math_elem/ln.rs

use crate::autograd::{Graph, NodeId, Op};
use crate::error::NeuraGradError;

impl Graph {
    /// Computes the natural logarithm of a scalar, clamped from below.
    ///
    /// Calculates \( \max(\ln(a), \text{floor}) \) where the floor defaults to
    /// `-100` ([`GraphOptions::log_floor`](crate::autograd::GraphOptions)).
    /// Zero and negative inputs therefore never produce `-inf` or `NaN`; they
    /// map to the floor.
    ///
    /// Backward: \( \frac{dL}{da} \mathrel{+}= \frac{dL}{dz} / (a + \epsilon) \)
    /// with \( \epsilon \) = `log_grad_epsilon` (default `1e-4`). The division
    /// uses the raw operand value even where the forward value was clamped.
    pub fn log(&mut self, a: NodeId) -> Result<NodeId, NeuraGradError> {
        let a_value = self.value(a)?;
        // f64::max ignores NaN, so negative inputs land on the floor too.
        let value = a_value.ln().max(self.options().log_floor);
        Ok(self.push(value, Op::Log(a)))
    }
}

#[cfg(test)]
#[path = "ln_test.rs"]
mod tests;
