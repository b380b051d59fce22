use crate::autograd::{Graph, NodeId};
use crate::error::NeuraGradError;
use crate::nn::activation::Activation;
use crate::nn::layers::neuron::Neuron;
use crate::nn::module::{check_width, Module};
use rand::Rng;

/// A fully-connected layer: `num_outputs` neurons reading the same inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    neurons: Vec<Neuron>,
    num_inputs: usize,
}

impl Layer {
    /// Creates a new Layer.
    ///
    /// # Arguments
    ///
    /// * `num_inputs` - Width of each input sample.
    /// * `num_outputs` - Number of neurons, i.e. width of the output.
    /// * `activation` - Applied by every neuron of the layer.
    pub fn new<R: Rng + ?Sized>(
        graph: &mut Graph,
        num_inputs: usize,
        num_outputs: usize,
        activation: Activation,
        rng: &mut R,
    ) -> Self {
        let neurons = (0..num_outputs)
            .map(|_| Neuron::new(graph, num_inputs, activation, rng))
            .collect();
        Layer {
            neurons,
            num_inputs,
        }
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    pub fn num_inputs(&self) -> usize {
        self.num_inputs
    }

    pub fn num_outputs(&self) -> usize {
        self.neurons.len()
    }
}

impl Module for Layer {
    type Output = Vec<NodeId>;

    /// Returns one node per neuron, in neuron order.
    fn forward(&self, graph: &mut Graph, input: &[NodeId]) -> Result<Vec<NodeId>, NeuraGradError> {
        check_width(input, self.num_inputs, "Layer forward")?;
        self.neurons
            .iter()
            .map(|neuron| neuron.forward(graph, input))
            .collect()
    }

    fn parameters(&self) -> Vec<NodeId> {
        self.neurons.iter().flat_map(|n| n.parameters()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_layer_shapes_and_parameters() -> Result<(), NeuraGradError> {
        let mut graph = Graph::new();
        let mut rng = StdRng::seed_from_u64(3);
        let layer = Layer::new(&mut graph, 2, 4, Activation::Relu, &mut rng);
        assert_eq!(layer.num_inputs(), 2);
        assert_eq!(layer.num_outputs(), 4);
        // (2 weights + 1 bias) per neuron
        assert_eq!(layer.parameters().len(), 12);
        assert_eq!(&layer.parameters()[..3], &layer.neurons()[0].parameters()[..]);

        let xs = graph.leaves(&[0.5, -0.5]);
        let out = layer.forward(&mut graph, &xs)?;
        assert_eq!(out.len(), 4);
        for id in out {
            assert!(graph.value(id)? >= 0.0);
        }
        Ok(())
    }

    #[test]
    fn test_layer_wrong_width_pushes_nothing() {
        let mut graph = Graph::new();
        let mut rng = StdRng::seed_from_u64(3);
        let layer = Layer::new(&mut graph, 2, 3, Activation::Tanh, &mut rng);
        let xs = graph.leaves(&[1.0, 2.0, 3.0]);
        let len_before = graph.len();
        assert!(matches!(
            layer.forward(&mut graph, &xs),
            Err(NeuraGradError::DimensionMismatch {
                expected: 2,
                actual: 3,
                ..
            })
        ));
        assert_eq!(graph.len(), len_before);
    }
}
