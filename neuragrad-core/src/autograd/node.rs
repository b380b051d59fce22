use crate::autograd::backward_op::Op;
use std::fmt;

/// Stable handle to a node stored in a [`Graph`](crate::autograd::Graph).
///
/// The `index` addresses the arena slot. The `generation` records which
/// incarnation of that slot the handle was issued for, so an id that outlived
/// a [`rewind`](crate::autograd::Graph::rewind) is rejected instead of
/// silently pointing at a newer node.
///
/// Ids are only meaningful in the graph that issued them. A graph rejects a
/// foreign id only when its index or generation does not match one of its own
/// slots; otherwise it resolves to whatever node sits at that index. Keep one
/// graph per set of ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    pub(crate) index: usize,
    pub(crate) generation: u32,
}

impl NodeId {
    /// Position of the node in the arena.
    pub fn index(&self) -> usize {
        self.index
    }
}

/// A single scalar entry of the computation graph.
///
/// Leaves carry `Op::Leaf`; derived nodes carry the operation that produced
/// them together with its operands.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub(crate) value: f64,
    pub(crate) grad: f64,
    pub(crate) op: Op,
    pub(crate) generation: u32,
}

impl Node {
    pub(crate) fn new(value: f64, op: Op, generation: u32) -> Self {
        Node {
            value,
            grad: 0.0,
            op,
            generation,
        }
    }

    /// Forward value computed when the node was built.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Gradient accumulated by the backward passes run so far.
    pub fn grad(&self) -> f64 {
        self.grad
    }

    pub fn op(&self) -> &Op {
        &self.op
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.op, Op::Leaf)
    }

    /// Operand ids in the order the operation consumed them.
    pub fn operands(&self) -> Vec<NodeId> {
        self.op.operands().collect()
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Value(data={:.4}, grad={:.4})", self.value, self.grad)
    }
}
