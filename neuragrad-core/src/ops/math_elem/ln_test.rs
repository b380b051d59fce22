#[cfg(test)]
mod tests {
    use crate::autograd::grad_check::check_grad;
    use crate::autograd::{Graph, GraphOptions, NodeId};
    use crate::error::NeuraGradError;
    use approx::assert_relative_eq;

    #[test]
    fn test_log_forward() -> Result<(), NeuraGradError> {
        let mut graph = Graph::new();
        let a = graph.leaf(std::f64::consts::E);
        let l = graph.log(a)?;
        assert_relative_eq!(graph.value(l)?, 1.0, epsilon = 1e-12);
        assert_eq!(graph.node(l)?.op().tag(), "log");
        Ok(())
    }

    #[test]
    fn test_log_clamps_zero_and_negative() -> Result<(), NeuraGradError> {
        let mut graph = Graph::new();
        let zero = graph.leaf(0.0);
        let negative = graph.leaf(-2.0);
        let l0 = graph.log(zero)?;
        let ln = graph.log(negative)?;
        assert_eq!(graph.value(l0)?, -100.0);
        assert_eq!(graph.value(ln)?, -100.0);
        Ok(())
    }

    #[test]
    fn test_log_backward_uses_epsilon() -> Result<(), NeuraGradError> {
        let mut graph = Graph::new();
        let a = graph.leaf(2.0);
        let l = graph.log(a)?;
        graph.backward(l)?;
        assert_relative_eq!(graph.grad(a)?, 1.0 / (2.0 + 1e-4), epsilon = 1e-15);

        let mut graph = Graph::new();
        let zero = graph.leaf(0.0);
        let l = graph.log(zero)?;
        graph.backward(l)?;
        // Finite even though the forward value was clamped.
        assert_relative_eq!(graph.grad(zero)?, 1e4, epsilon = 1e-6);
        Ok(())
    }

    #[test]
    fn test_log_custom_options() -> Result<(), NeuraGradError> {
        let mut graph = Graph::with_options(GraphOptions {
            log_floor: -10.0,
            log_grad_epsilon: 0.0,
        });
        let zero = graph.leaf(0.0);
        let l = graph.log(zero)?;
        assert_eq!(graph.value(l)?, -10.0);

        let a = graph.leaf(4.0);
        let la = graph.log(a)?;
        graph.backward(la)?;
        assert_eq!(graph.grad(a)?, 0.25);
        Ok(())
    }

    #[test]
    fn test_log_check_grad_away_from_singularity() {
        // The epsilon shifts the analytic gradient by ~1e-4 relative; stay
        // well inside the tolerance.
        let func = |graph: &mut Graph, inputs: &[NodeId]| graph.log(inputs[0]);
        check_grad(func, &[3.0], 1e-6, 1e-3).expect("log gradient check failed");
    }
}
