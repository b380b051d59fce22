use crate::autograd::graph::GraphOptions;
use crate::autograd::node::{Node, NodeId};
use std::fmt;

/// Operation that produced a node, together with its operands.
///
/// This is the per-node dispatch table of the backward pass: every derived
/// node stores the variant describing how it was computed, and
/// [`Op::backward`] applies the matching local gradient rule. Operand order is
/// fixed by the operation and matters for `Pow` (the exponent is a plain
/// constant, not a node).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Op {
    /// Input or trainable parameter. Its backward rule is a no-op.
    Leaf,
    Add(NodeId, NodeId),
    Mul(NodeId, NodeId),
    Pow(NodeId, f64),
    Log(NodeId),
    Relu(NodeId),
    Tanh(NodeId),
    Sigmoid(NodeId),
}

impl Op {
    /// Operands of the operation, in forward order. Empty for leaves.
    pub fn operands(&self) -> impl Iterator<Item = NodeId> {
        let (first, second) = match *self {
            Op::Leaf => (None, None),
            Op::Add(a, b) | Op::Mul(a, b) => (Some(a), Some(b)),
            Op::Pow(a, _) | Op::Log(a) | Op::Relu(a) | Op::Tanh(a) | Op::Sigmoid(a) => {
                (Some(a), None)
            }
        };
        first.into_iter().chain(second)
    }

    /// Short label used when printing a graph. Not read by any algorithm.
    pub fn tag(&self) -> String {
        self.to_string()
    }

    /// Adds this node's contribution into the adjoints of its operands.
    ///
    /// `out_value` is the value of the node that owns this op and `out_grad`
    /// its adjoint for the current pass, already complete because every
    /// consumer ran first. Operand values are read from `nodes`; contributions
    /// go to `grads`, indexed like `nodes`. Operand ids must be validated by
    /// the caller.
    pub(crate) fn backward(
        &self,
        out_value: f64,
        out_grad: f64,
        nodes: &[Node],
        grads: &mut [f64],
        options: &GraphOptions,
    ) {
        match *self {
            Op::Leaf => {}
            Op::Add(a, b) => {
                grads[a.index] += out_grad;
                grads[b.index] += out_grad;
            }
            Op::Mul(a, b) => {
                grads[a.index] += out_grad * nodes[b.index].value;
                grads[b.index] += out_grad * nodes[a.index].value;
            }
            Op::Pow(a, exponent) => {
                let a_value = nodes[a.index].value;
                grads[a.index] += out_grad * exponent * a_value.powf(exponent - 1.0);
            }
            Op::Log(a) => {
                // Divides by the operand value, not the clamped output.
                grads[a.index] += out_grad / (nodes[a.index].value + options.log_grad_epsilon);
            }
            Op::Relu(a) => {
                if nodes[a.index].value > 0.0 {
                    grads[a.index] += out_grad;
                }
            }
            Op::Tanh(a) => {
                grads[a.index] += out_grad * (1.0 - out_value * out_value);
            }
            Op::Sigmoid(a) => {
                grads[a.index] += out_grad * out_value * (1.0 - out_value);
            }
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Leaf => Ok(()),
            Op::Add(..) => write!(f, "+"),
            Op::Mul(..) => write!(f, "*"),
            Op::Pow(_, exponent) => write!(f, "**{}", exponent),
            Op::Log(_) => write!(f, "log"),
            Op::Relu(_) => write!(f, "ReLU"),
            Op::Tanh(_) => write!(f, "Tanh"),
            Op::Sigmoid(_) => write!(f, "Sigmoid"),
        }
    }
}
