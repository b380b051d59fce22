use crate::autograd::{Graph, NodeId};
use crate::error::NeuraGradError;
use crate::nn::activation::Activation;
use crate::nn::layers::layer::Layer;
use crate::nn::module::{check_width, Module};
use rand::Rng;

/// Multi-layer perceptron for binary classification.
///
/// Hidden layers use ReLU and the final layer is a single sigmoid neuron, so
/// the forward pass yields a probability in `(0, 1)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Mlp {
    layers: Vec<Layer>,
    num_inputs: usize,
}

impl Mlp {
    /// Builds layers of the given sizes on top of `num_inputs` features.
    ///
    /// # Errors
    /// `InvalidArchitecture` when `layer_sizes` is empty, contains a zero, or
    /// does not end with a single output neuron, or when `num_inputs` is zero.
    /// No node is created in that case.
    pub fn new<R: Rng + ?Sized>(
        graph: &mut Graph,
        num_inputs: usize,
        layer_sizes: &[usize],
        rng: &mut R,
    ) -> Result<Self, NeuraGradError> {
        match layer_sizes.last() {
            None => {
                return Err(NeuraGradError::InvalidArchitecture(
                    "at least one layer is required".to_string(),
                ))
            }
            Some(&last) if last != 1 => {
                return Err(NeuraGradError::InvalidArchitecture(format!(
                    "only single neuron output MLPs are supported, got {} outputs",
                    last
                )))
            }
            _ => {}
        }
        if num_inputs == 0 || layer_sizes.contains(&0) {
            return Err(NeuraGradError::InvalidArchitecture(
                "layer widths must be non-zero".to_string(),
            ));
        }

        let mut layers = Vec::with_capacity(layer_sizes.len());
        let mut fan_in = num_inputs;
        for (i, &size) in layer_sizes.iter().enumerate() {
            let activation = if i == layer_sizes.len() - 1 {
                Activation::Sigmoid
            } else {
                Activation::Relu
            };
            layers.push(Layer::new(graph, fan_in, size, activation, rng));
            fan_in = size;
        }
        log::debug!(
            "built MLP {} -> {:?} with {} parameters",
            num_inputs,
            layer_sizes,
            layers.iter().map(|l| l.parameters().len()).sum::<usize>()
        );

        Ok(Mlp { layers, num_inputs })
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn num_inputs(&self) -> usize {
        self.num_inputs
    }
}

impl Module for Mlp {
    type Output = NodeId;

    fn forward(&self, graph: &mut Graph, input: &[NodeId]) -> Result<NodeId, NeuraGradError> {
        check_width(input, self.num_inputs, "Mlp forward")?;
        let mut out = input.to_vec();
        for layer in &self.layers {
            out = layer.forward(graph, &out)?;
        }
        match out.as_slice() {
            [single] => Ok(*single),
            _ => Err(NeuraGradError::DimensionMismatch {
                expected: 1,
                actual: out.len(),
                operation: "Mlp output".to_string(),
            }),
        }
    }

    /// Layer by layer, neuron by neuron, weights before bias.
    fn parameters(&self) -> Vec<NodeId> {
        self.layers.iter().flat_map(|l| l.parameters()).collect()
    }
}

#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests;
