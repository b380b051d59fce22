// neuragrad-core/src/nn/losses/hinge.rs

use crate::autograd::{Graph, NodeId};
use crate::error::NeuraGradError;
use crate::nn::losses::batch_size;

/// Hinge loss: `(1/n) * sum_i relu(1 - t_i * p_i)`.
///
/// Targets are expected in `{-1, 1}`. Samples classified with a margin of at
/// least one contribute neither loss nor gradient.
pub fn hinge_loss(
    graph: &mut Graph,
    y_true: &[NodeId],
    y_pred: &[NodeId],
) -> Result<NodeId, NeuraGradError> {
    let n = batch_size(y_true, y_pred, "hinge_loss")?;
    let mut loss = graph.leaf(0.0);
    for (&t, &p) in y_true.iter().zip(y_pred) {
        let neg_t = graph.neg(t)?;
        let margin = graph.mul(neg_t, p)?;
        let shifted = graph.add(margin, 1.0)?;
        let sample_loss = graph.relu(shifted)?;
        loss = graph.add(loss, sample_loss)?;
    }
    graph.mul(loss, 1.0 / n as f64)
}
