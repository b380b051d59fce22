use crate::autograd::backward_op::Op;
use crate::autograd::node::{Node, NodeId};
use crate::error::NeuraGradError;
use crate::ops::Operand;
use std::collections::HashSet;

/// Numerical knobs of the operation library.
///
/// `log_floor` is the value `log` returns instead of `-inf` for non-positive
/// inputs. `log_grad_epsilon` is added to the operand before dividing in the
/// `log` backward rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphOptions {
    pub log_floor: f64,
    pub log_grad_epsilon: f64,
}

impl Default for GraphOptions {
    fn default() -> Self {
        GraphOptions {
            log_floor: -100.0,
            log_grad_epsilon: 1e-4,
        }
    }
}

/// Length of the arena at the time [`Graph::checkpoint`] was called.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint {
    len: usize,
}

/// Arena owning every node of a computation graph.
///
/// Nodes reference their operands by [`NodeId`], so a node shared by many
/// consumers (a weight reused by every sample of a batch) is stored once and
/// mutated in place during the backward pass. Nodes can only reference ids
/// that already exist, which keeps the graph acyclic: every operand index is
/// strictly smaller than the index of the node built from it.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    generation: u32,
    options: GraphOptions,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: GraphOptions) -> Self {
        Graph {
            nodes: Vec::new(),
            generation: 0,
            options,
        }
    }

    pub fn options(&self) -> &GraphOptions {
        &self.options
    }

    /// Number of nodes currently stored.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // --- Construction ---

    /// Creates a leaf node (input or parameter) with a zero gradient.
    pub fn leaf(&mut self, value: f64) -> NodeId {
        self.push(value, Op::Leaf)
    }

    /// Creates one leaf per value, preserving order.
    pub fn leaves(&mut self, values: &[f64]) -> Vec<NodeId> {
        values.iter().map(|&v| self.leaf(v)).collect()
    }

    /// Lifts a matrix of raw numbers into rows of leaves.
    pub fn leaves_from_matrix(&mut self, rows: &[Vec<f64>]) -> Vec<Vec<NodeId>> {
        rows.iter().map(|row| self.leaves(row)).collect()
    }

    /// Appends a node. Operands inside `op` must already be validated.
    pub(crate) fn push(&mut self, value: f64, op: Op) -> NodeId {
        let id = NodeId {
            index: self.nodes.len(),
            generation: self.generation,
        };
        self.nodes.push(Node::new(value, op, self.generation));
        id
    }

    /// Turns an operand into a node id, lifting plain numbers into fresh leaves.
    pub(crate) fn resolve(&mut self, operand: Operand) -> Result<NodeId, NeuraGradError> {
        match operand {
            Operand::Node(id) => {
                self.check(id)?;
                Ok(id)
            }
            Operand::Scalar(value) => Ok(self.leaf(value)),
        }
    }

    pub(crate) fn check(&self, id: NodeId) -> Result<(), NeuraGradError> {
        let node = self.nodes.get(id.index).ok_or_else(|| NeuraGradError::UnknownNode {
            index: id.index,
            len: self.nodes.len(),
        })?;
        if node.generation != id.generation {
            return Err(NeuraGradError::StaleNode {
                index: id.index,
                node_generation: id.generation,
                slot_generation: node.generation,
            });
        }
        Ok(())
    }

    // --- Access ---

    pub fn node(&self, id: NodeId) -> Result<&Node, NeuraGradError> {
        self.check(id)?;
        Ok(&self.nodes[id.index])
    }

    pub fn value(&self, id: NodeId) -> Result<f64, NeuraGradError> {
        self.node(id).map(Node::value)
    }

    pub fn grad(&self, id: NodeId) -> Result<f64, NeuraGradError> {
        self.node(id).map(Node::grad)
    }

    /// Overwrites the value of a leaf, typically a parameter update.
    ///
    /// Derived nodes already built from the old value keep their value.
    pub fn set_value(&mut self, id: NodeId, value: f64) -> Result<(), NeuraGradError> {
        self.check(id)?;
        let node = &mut self.nodes[id.index];
        if !node.is_leaf() {
            return Err(NeuraGradError::NotALeaf { index: id.index });
        }
        node.value = value;
        Ok(())
    }

    /// Resets the gradient of every given node to zero.
    ///
    /// All ids are validated first, so an invalid id leaves every gradient
    /// untouched.
    pub fn zero_grad(&mut self, ids: &[NodeId]) -> Result<(), NeuraGradError> {
        for &id in ids {
            self.check(id)?;
        }
        for id in ids {
            self.nodes[id.index].grad = 0.0;
        }
        Ok(())
    }

    // --- Lifecycle ---

    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            len: self.nodes.len(),
        }
    }

    /// Drops every node created after `checkpoint`.
    ///
    /// Ids of dropped nodes become stale and are rejected from then on, even
    /// once their slots are reused.
    pub fn rewind(&mut self, checkpoint: Checkpoint) {
        if checkpoint.len > self.nodes.len() {
            log::warn!(
                "rewind to {} nodes ignored: graph only holds {}",
                checkpoint.len,
                self.nodes.len()
            );
            return;
        }
        if checkpoint.len == self.nodes.len() {
            return;
        }
        log::trace!(
            "rewinding graph from {} to {} nodes",
            self.nodes.len(),
            checkpoint.len
        );
        self.nodes.truncate(checkpoint.len);
        self.generation = self.generation.wrapping_add(1);
    }

    // --- Backward engine ---

    /// Topological order of the subgraph reachable from `root`.
    ///
    /// Every node appears after all of its operands (post-order). Nodes are
    /// keyed by identity, never by value. The traversal uses an explicit
    /// stack so long chains cannot exhaust the call stack.
    pub fn topological_order(&self, root: NodeId) -> Result<Vec<NodeId>, NeuraGradError> {
        self.check(root)?;

        let mut visited: HashSet<NodeId> = HashSet::new();
        let mut sorted = Vec::new();
        let mut stack = vec![(root, false)];

        while let Some((id, expanded)) = stack.pop() {
            if expanded {
                sorted.push(id);
                continue;
            }
            if !visited.insert(id) {
                continue;
            }
            stack.push((id, true));

            let operands: Vec<NodeId> = self.nodes[id.index].op.operands().collect();
            // Reversed so the first operand is visited first.
            for operand in operands.into_iter().rev() {
                self.check(operand)?;
                if operand.index >= id.index {
                    return Err(NeuraGradError::CycleDetected {
                        node: id.index,
                        operand: operand.index,
                    });
                }
                if !visited.contains(&operand) {
                    stack.push((operand, false));
                }
            }
        }

        Ok(sorted)
    }

    /// Computes the gradient of `root` with respect to every reachable node.
    ///
    /// The pass sets `root`'s gradient to 1.0, runs each node's local rule
    /// exactly once (consumers before producers) into a scratch buffer, then
    /// adds the result into the stored gradients of every other reachable
    /// node. Those are only ever accumulated: running the pass twice doubles
    /// them, and [`Graph::zero_grad`] is how a caller starts fresh.
    pub fn backward(&mut self, root: NodeId) -> Result<(), NeuraGradError> {
        let sorted = self.topological_order(root)?;
        log::debug!(
            "backward from node {}: {} reachable nodes",
            root.index,
            sorted.len()
        );

        // Every reachable node has an index <= root.index.
        let mut grads = vec![0.0; root.index + 1];
        grads[root.index] = 1.0;
        for id in sorted.iter().rev() {
            let node = &self.nodes[id.index];
            node.op
                .backward(node.value, grads[id.index], &self.nodes, &mut grads, &self.options);
        }

        for id in &sorted {
            if id.index != root.index {
                self.nodes[id.index].grad += grads[id.index];
            }
        }
        self.nodes[root.index].grad = 1.0;
        Ok(())
    }
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
