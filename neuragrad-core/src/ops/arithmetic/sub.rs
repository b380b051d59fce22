// neuragrad-core/src/ops/arithmetic/sub.rs

use crate::autograd::{Graph, NodeId};
use crate::error::NeuraGradError;
use crate::ops::Operand;

impl Graph {
    /// Subtracts `b` from `a`, composed as `a + (-b)`.
    pub fn sub(&mut self, a: NodeId, b: impl Into<Operand>) -> Result<NodeId, NeuraGradError> {
        self.check(a)?;
        let b = self.resolve(b.into())?;
        let neg_b = self.neg(b)?;
        self.add(a, neg_b)
    }
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
