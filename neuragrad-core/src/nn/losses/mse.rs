// neuragrad-core/src/nn/losses/mse.rs

use crate::autograd::{Graph, NodeId};
use crate::error::NeuraGradError;
use crate::nn::losses::batch_size;

/// Mean squared error: `(1/n) * sum_i (t_i - p_i)^2`.
///
/// The difference is built as `t + (-p)` and squared with `pow(2)`, so the
/// gradient with respect to each prediction is `-2 * (t_i - p_i) / n`.
///
/// # Errors
/// `DimensionMismatch` if the slices differ in length, `EmptyInput` if they
/// are empty.
pub fn mse_loss(
    graph: &mut Graph,
    y_true: &[NodeId],
    y_pred: &[NodeId],
) -> Result<NodeId, NeuraGradError> {
    let n = batch_size(y_true, y_pred, "mse_loss")?;
    let mut loss = graph.leaf(0.0);
    for (&t, &p) in y_true.iter().zip(y_pred) {
        let neg_p = graph.neg(p)?;
        let diff = graph.add(t, neg_p)?;
        let squared = graph.pow(diff, 2.0)?;
        loss = graph.add(loss, squared)?;
    }
    graph.mul(loss, 1.0 / n as f64)
}

#[cfg(test)]
#[path = "mse_test.rs"]
mod tests;
