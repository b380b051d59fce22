#[cfg(test)]
mod tests {
    use crate::autograd::Graph;
    use crate::error::NeuraGradError;
    use crate::nn::init::{full, randn, zeros};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_zeros_and_full() -> Result<(), NeuraGradError> {
        let mut graph = Graph::new();
        let z = zeros(&mut graph, 3);
        let f = full(&mut graph, 2, 1.5);
        assert_eq!(graph.len(), 5);
        for id in z {
            assert_eq!(graph.value(id)?, 0.0);
            assert!(graph.node(id)?.is_leaf());
        }
        for id in f {
            assert_eq!(graph.value(id)?, 1.5);
        }
        Ok(())
    }

    #[test]
    fn test_randn_is_reproducible_with_seed() -> Result<(), NeuraGradError> {
        let mut graph = Graph::new();
        let a = randn(&mut graph, 4, &mut StdRng::seed_from_u64(7));
        let b = randn(&mut graph, 4, &mut StdRng::seed_from_u64(7));
        for (x, y) in a.iter().zip(b.iter()) {
            assert_ne!(x, y, "each call creates its own leaves");
            assert_eq!(graph.value(*x)?, graph.value(*y)?);
        }
        Ok(())
    }

    #[test]
    fn test_randn_statistics() -> Result<(), NeuraGradError> {
        let mut graph = Graph::new();
        let ids = randn(&mut graph, 5000, &mut StdRng::seed_from_u64(42));
        let values: Vec<f64> = ids
            .iter()
            .map(|&id| graph.value(id))
            .collect::<Result<_, _>>()?;
        let mean = values.iter().sum::<f64>() / values.len() as f64;
        let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
        assert!(mean.abs() < 0.1, "mean {} too far from 0", mean);
        assert!((var - 1.0).abs() < 0.1, "variance {} too far from 1", var);
        Ok(())
    }
}
