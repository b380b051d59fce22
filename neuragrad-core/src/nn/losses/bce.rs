// neuragrad-core/src/nn/losses/bce.rs

use crate::autograd::{Graph, NodeId};
use crate::error::NeuraGradError;
use crate::nn::losses::batch_size;

/// Binary cross-entropy:
/// `-(1/n) * sum_i [t_i * log(p_i) + (1 - t_i) * log(1 - p_i)]`.
///
/// Predictions are probabilities, typically the output of a sigmoid. The log
/// is the graph's clamped log, so a saturated prediction of exactly 0 or 1
/// yields a large finite loss instead of infinity.
pub fn binary_cross_entropy(
    graph: &mut Graph,
    y_true: &[NodeId],
    y_pred: &[NodeId],
) -> Result<NodeId, NeuraGradError> {
    let n = batch_size(y_true, y_pred, "binary_cross_entropy")?;
    let mut loss = graph.leaf(0.0);
    for (&t, &p) in y_true.iter().zip(y_pred) {
        let log_p = graph.log(p)?;
        let positive = graph.mul(t, log_p)?;

        let neg_t = graph.neg(t)?;
        let one_minus_t = graph.add(neg_t, 1.0)?;
        let neg_p = graph.neg(p)?;
        let one_minus_p = graph.add(neg_p, 1.0)?;
        let log_one_minus_p = graph.log(one_minus_p)?;
        let negative = graph.mul(one_minus_t, log_one_minus_p)?;

        let sample_loss = graph.add(positive, negative)?;
        loss = graph.add(loss, sample_loss)?;
    }
    graph.mul(loss, -1.0 / n as f64)
}
