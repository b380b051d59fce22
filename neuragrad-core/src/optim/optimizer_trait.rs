use crate::autograd::{Graph, NodeId};
use crate::error::NeuraGradError;

/// Trait defining the common interface for all optimizers.
///
/// Optimizers are responsible for updating model parameters based on their
/// gradients. Parameters are leaves of a [`Graph`]; the optimizer only keeps
/// their ids.
pub trait Optimizer {
    /// Performs a single optimization step.
    ///
    /// This method applies the optimization algorithm to update the leaf
    /// values of the managed parameters, using their accumulated gradients.
    ///
    /// # Returns
    ///
    /// `Ok(())` if the step was successful, or a `NeuraGradError` otherwise.
    /// On error no parameter has been modified.
    fn step(&mut self, graph: &mut Graph) -> Result<(), NeuraGradError>;

    /// Clears the gradients of all parameters managed by the optimizer.
    ///
    /// This is typically called before the backward pass in a new training
    /// iteration to prevent gradients from accumulating across iterations.
    fn zero_grad(&self, graph: &mut Graph) -> Result<(), NeuraGradError> {
        graph.zero_grad(self.params())
    }

    /// Ids of the parameters managed by the optimizer.
    fn params(&self) -> &[NodeId];

    /// Current learning rate.
    fn lr(&self) -> f64;

    /// Sets the learning rate used by the next `step`.
    fn set_lr(&mut self, lr: f64);
}
