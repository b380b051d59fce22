// neuragrad-core/src/nn/losses/l2.rs

use crate::autograd::{Graph, NodeId};
use crate::error::NeuraGradError;

/// L2 weight penalty: `alpha * sum_p p * p`.
///
/// Added to a data loss it pulls every parameter towards zero with a
/// gradient of `2 * alpha * p`. An empty parameter list yields zero.
pub fn l2_penalty(
    graph: &mut Graph,
    params: &[NodeId],
    alpha: f64,
) -> Result<NodeId, NeuraGradError> {
    let mut penalty = graph.leaf(0.0);
    for &p in params {
        let squared = graph.mul(p, p)?;
        penalty = graph.add(penalty, squared)?;
    }
    graph.mul(penalty, alpha)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_l2_penalty_value_and_grad() -> Result<(), NeuraGradError> {
        let mut graph = Graph::new();
        let params = graph.leaves(&[1.0, -2.0, 0.5]);
        let penalty = l2_penalty(&mut graph, &params, 1e-4)?;
        assert_relative_eq!(graph.value(penalty)?, 5.25e-4, epsilon = 1e-15);

        graph.backward(penalty)?;
        // d/dp (p * p) counts both operand slots.
        assert_relative_eq!(graph.grad(params[1])?, 2.0 * 1e-4 * -2.0, epsilon = 1e-15);
        Ok(())
    }

    #[test]
    fn test_l2_penalty_empty() -> Result<(), NeuraGradError> {
        let mut graph = Graph::new();
        let penalty = l2_penalty(&mut graph, &[], 0.5)?;
        assert_eq!(graph.value(penalty)?, 0.0);
        Ok(())
    }
}
