#[cfg(test)]
mod tests {
    use crate::autograd::grad_check::check_grad;
    use crate::autograd::{Graph, NodeId};
    use crate::error::NeuraGradError;
    use crate::nn::{Activation, Mlp, Module};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_mlp_architecture() -> Result<(), NeuraGradError> {
        let mut graph = Graph::new();
        let mlp = Mlp::new(&mut graph, 2, &[16, 16, 1], &mut StdRng::seed_from_u64(0))?;
        assert_eq!(mlp.layers().len(), 3);
        assert_eq!(mlp.layers()[0].num_outputs(), 16);
        assert_eq!(mlp.layers()[1].num_inputs(), 16);
        assert_eq!(mlp.layers()[2].num_outputs(), 1);
        for layer in &mlp.layers()[..2] {
            assert!(layer
                .neurons()
                .iter()
                .all(|n| n.activation() == Activation::Relu));
        }
        assert_eq!(
            mlp.layers()[2].neurons()[0].activation(),
            Activation::Sigmoid
        );
        // 16*(2+1) + 16*(16+1) + 1*(16+1)
        assert_eq!(mlp.parameters().len(), 337);
        assert_eq!(graph.len(), 337);
        Ok(())
    }

    #[test]
    fn test_mlp_rejects_bad_architectures() {
        let mut graph = Graph::new();
        let mut rng = StdRng::seed_from_u64(0);
        for sizes in [&[][..], &[4, 2][..], &[3, 0, 1][..]] {
            assert!(matches!(
                Mlp::new(&mut graph, 2, sizes, &mut rng),
                Err(NeuraGradError::InvalidArchitecture(_))
            ));
        }
        assert!(matches!(
            Mlp::new(&mut graph, 0, &[1], &mut rng),
            Err(NeuraGradError::InvalidArchitecture(_))
        ));
        assert!(graph.is_empty());
    }

    #[test]
    fn test_mlp_forward_is_probability() -> Result<(), NeuraGradError> {
        let mut graph = Graph::new();
        let mlp = Mlp::new(&mut graph, 2, &[8, 1], &mut StdRng::seed_from_u64(5))?;
        for sample in [[0.0, 0.0], [1.5, -0.3], [-2.0, 4.0]] {
            let xs = graph.leaves(&sample);
            let out = mlp.forward(&mut graph, &xs)?;
            let p = graph.value(out)?;
            assert!(p > 0.0 && p < 1.0, "output {} is not a probability", p);
        }
        Ok(())
    }

    #[test]
    fn test_mlp_wrong_width_leaves_grads_untouched() -> Result<(), NeuraGradError> {
        let mut graph = Graph::new();
        let mlp = Mlp::new(&mut graph, 2, &[4, 1], &mut StdRng::seed_from_u64(9))?;
        let xs = graph.leaves(&[0.3, 0.7]);
        let out = mlp.forward(&mut graph, &xs)?;
        graph.backward(out)?;
        let grads_before: Vec<f64> = mlp
            .parameters()
            .iter()
            .map(|&p| graph.grad(p))
            .collect::<Result<_, _>>()?;
        let len_before = graph.len();

        let bad = graph.leaves(&[1.0, 2.0, 3.0]);
        assert!(matches!(
            mlp.forward(&mut graph, &bad),
            Err(NeuraGradError::DimensionMismatch { .. })
        ));
        assert_eq!(graph.len(), len_before + 3);
        for (&p, &g) in mlp.parameters().iter().zip(&grads_before) {
            assert_eq!(graph.grad(p)?, g);
        }
        Ok(())
    }

    #[test]
    fn test_mlp_zero_grad() -> Result<(), NeuraGradError> {
        let mut graph = Graph::new();
        let mlp = Mlp::new(&mut graph, 2, &[3, 1], &mut StdRng::seed_from_u64(11))?;
        let xs = graph.leaves(&[1.0, -1.0]);
        let out = mlp.forward(&mut graph, &xs)?;
        graph.backward(out)?;
        mlp.zero_grad(&mut graph)?;
        for p in mlp.parameters() {
            assert_eq!(graph.grad(p)?, 0.0);
        }
        Ok(())
    }

    #[test]
    fn test_mlp_gradients_match_finite_differences() {
        // Tanh hidden units keep the function smooth around the probe point.
        let func = |graph: &mut Graph, inputs: &[NodeId]| {
            let (x, params) = inputs.split_at(2);
            let h0 = graph.mul(params[0], x[0])?;
            let h1 = graph.mul(params[1], x[1])?;
            let pre = graph.add(h0, h1)?;
            let pre = graph.add(pre, params[2])?;
            let hidden = Activation::Tanh.apply(graph, pre)?;
            let out = graph.mul(hidden, params[3])?;
            let out = graph.add(out, params[4])?;
            Activation::Sigmoid.apply(graph, out)
        };
        check_grad(func, &[0.4, -1.1, 0.7, -0.2, 0.1, 1.3, -0.5], 1e-6, 1e-4)
            .expect("network gradient check failed");
    }
}
