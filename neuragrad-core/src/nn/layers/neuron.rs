use crate::autograd::{Graph, NodeId};
use crate::error::NeuraGradError;
use crate::nn::activation::Activation;
use crate::nn::init;
use crate::nn::module::{check_width, Module};
use rand::Rng;

/// A single unit: `activation(sum_i w_i * x_i + b)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Neuron {
    weights: Vec<NodeId>,
    bias: NodeId,
    activation: Activation,
}

impl Neuron {
    /// Creates a neuron with `num_inputs` weights drawn from N(0, 1) and a
    /// zero bias, all stored as leaves of `graph`.
    pub fn new<R: Rng + ?Sized>(
        graph: &mut Graph,
        num_inputs: usize,
        activation: Activation,
        rng: &mut R,
    ) -> Self {
        let weights = init::randn(graph, num_inputs, rng);
        let bias = init::zeros(graph, 1)[0];
        Neuron {
            weights,
            bias,
            activation,
        }
    }

    pub fn weights(&self) -> &[NodeId] {
        &self.weights
    }

    pub fn bias(&self) -> NodeId {
        self.bias
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    pub fn num_inputs(&self) -> usize {
        self.weights.len()
    }
}

impl Module for Neuron {
    type Output = NodeId;

    fn forward(&self, graph: &mut Graph, input: &[NodeId]) -> Result<NodeId, NeuraGradError> {
        check_width(input, self.weights.len(), "Neuron forward")?;

        let mut act = graph.leaf(0.0);
        for (&w, &x) in self.weights.iter().zip(input) {
            let wx = graph.mul(w, x)?;
            act = graph.add(act, wx)?;
        }
        act = graph.add(act, self.bias)?;
        self.activation.apply(graph, act)
    }

    /// Weights in input order, then the bias.
    fn parameters(&self) -> Vec<NodeId> {
        let mut params = self.weights.clone();
        params.push(self.bias);
        params
    }
}

#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;
