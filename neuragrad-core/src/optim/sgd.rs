use crate::autograd::{Graph, NodeId};
use crate::error::NeuraGradError;
use crate::optim::optimizer_trait::Optimizer;

/// Implements plain Stochastic Gradient Descent (SGD).
///
/// Each step applies `p <- p - lr * grad(p)` to every managed parameter.
/// Regularization is expected to be part of the loss (see
/// [`l2_penalty`](crate::nn::l2_penalty)).
#[derive(Debug, Clone, PartialEq)]
pub struct SgdOptimizer {
    params: Vec<NodeId>,
    lr: f64,
}

impl SgdOptimizer {
    /// Creates a new `SgdOptimizer`.
    ///
    /// # Arguments
    ///
    /// * `params`: The parameter ids to optimize, usually `Module::parameters()`.
    /// * `lr`: The learning rate.
    pub fn new(params: impl IntoIterator<Item = NodeId>, lr: f64) -> Self {
        SgdOptimizer {
            params: params.into_iter().collect(),
            lr,
        }
    }
}

impl Optimizer for SgdOptimizer {
    fn step(&mut self, graph: &mut Graph) -> Result<(), NeuraGradError> {
        // Read and validate everything first so a bad id aborts before any update.
        let mut updates = Vec::with_capacity(self.params.len());
        for &p in &self.params {
            let node = graph.node(p)?;
            if !node.is_leaf() {
                return Err(NeuraGradError::NotALeaf { index: p.index() });
            }
            updates.push((p, node.value() - self.lr * node.grad()));
        }
        for (p, value) in updates {
            graph.set_value(p, value)?;
        }
        log::trace!("SGD step over {} parameters, lr={}", self.params.len(), self.lr);
        Ok(())
    }

    fn params(&self) -> &[NodeId] {
        &self.params
    }

    fn lr(&self) -> f64 {
        self.lr
    }

    fn set_lr(&mut self, lr: f64) {
        self.lr = lr;
    }
}
