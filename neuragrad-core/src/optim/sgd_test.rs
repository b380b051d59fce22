#[cfg(test)]
mod tests {
    use crate::autograd::Graph;
    use crate::error::NeuraGradError;
    use crate::optim::{Optimizer, SgdOptimizer};
    use approx::assert_relative_eq;

    #[test]
    fn test_sgd_basic_step() -> Result<(), NeuraGradError> {
        let mut graph = Graph::new();
        let params = graph.leaves(&[1.0, 2.0, 3.0]);
        // loss = 0.1*p0 + 0.2*p1 + 0.3*p2
        let terms = [
            graph.mul(params[0], 0.1)?,
            graph.mul(params[1], 0.2)?,
            graph.mul(params[2], 0.3)?,
        ];
        let loss = graph.sum(&terms)?;
        graph.backward(loss)?;

        let mut optimizer = SgdOptimizer::new(params.clone(), 0.5);
        optimizer.step(&mut graph)?;
        assert_relative_eq!(graph.value(params[0])?, 0.95, epsilon = 1e-12);
        assert_relative_eq!(graph.value(params[1])?, 1.9, epsilon = 1e-12);
        assert_relative_eq!(graph.value(params[2])?, 2.85, epsilon = 1e-12);
        // Gradients are left for zero_grad.
        assert_relative_eq!(graph.grad(params[2])?, 0.3, epsilon = 1e-12);

        optimizer.zero_grad(&mut graph)?;
        for &p in &params {
            assert_eq!(graph.grad(p)?, 0.0);
        }
        Ok(())
    }

    #[test]
    fn test_sgd_step_decreases_quadratic() -> Result<(), NeuraGradError> {
        let mut graph = Graph::new();
        let w = graph.leaf(3.0);
        let mut optimizer = SgdOptimizer::new([w], 0.1);
        let mut previous = f64::INFINITY;
        for _ in 0..20 {
            let checkpoint = graph.checkpoint();
            let loss = graph.pow(w, 2.0)?;
            let value = graph.value(loss)?;
            assert!(value < previous);
            previous = value;
            optimizer.zero_grad(&mut graph)?;
            graph.backward(loss)?;
            optimizer.step(&mut graph)?;
            graph.rewind(checkpoint);
        }
        // w shrinks by a factor 0.8 per step.
        assert_relative_eq!(graph.value(w)?, 3.0 * 0.8f64.powi(20), epsilon = 1e-9);
        Ok(())
    }

    #[test]
    fn test_sgd_set_lr() {
        let mut optimizer = SgdOptimizer::new(Vec::new(), 1.0);
        assert_eq!(optimizer.lr(), 1.0);
        optimizer.set_lr(0.25);
        assert_eq!(optimizer.lr(), 0.25);
        assert!(optimizer.params().is_empty());
    }

    #[test]
    fn test_sgd_rejects_derived_node_without_partial_update() -> Result<(), NeuraGradError> {
        let mut graph = Graph::new();
        let w = graph.leaf(1.0);
        let derived = graph.mul(w, 2.0)?;
        graph.backward(derived)?;
        let mut optimizer = SgdOptimizer::new([w, derived], 0.1);
        assert_eq!(
            optimizer.step(&mut graph),
            Err(NeuraGradError::NotALeaf {
                index: derived.index()
            })
        );
        assert_eq!(graph.value(w)?, 1.0);
        Ok(())
    }
}
