// neuragrad-core/src/ops/arithmetic/add.rs

use crate::autograd::{Graph, NodeId, Op};
use crate::error::NeuraGradError;
use crate::ops::Operand;

impl Graph {
    /// Adds two scalars: `a + b`.
    ///
    /// `b` may be a node or a plain number (lifted into a leaf).
    ///
    /// Backward: both operands receive the upstream gradient unchanged.
    ///
    /// # Errors
    /// `UnknownNode` / `StaleNode` if an id does not belong to this graph.
    /// Nothing is pushed in that case.
    pub fn add(&mut self, a: NodeId, b: impl Into<Operand>) -> Result<NodeId, NeuraGradError> {
        let a_value = self.value(a)?;
        let b = self.resolve(b.into())?;
        let b_value = self.value(b)?;
        Ok(self.push(a_value + b_value, Op::Add(a, b)))
    }

    /// Sums a sequence of nodes as a left fold starting from a zero leaf.
    ///
    /// An empty slice yields that zero leaf.
    pub fn sum(&mut self, ids: &[NodeId]) -> Result<NodeId, NeuraGradError> {
        for &id in ids {
            self.check(id)?;
        }
        let mut acc = self.leaf(0.0);
        for &id in ids {
            acc = self.add(acc, id)?;
        }
        Ok(acc)
    }
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
