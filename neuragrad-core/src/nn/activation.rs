use crate::autograd::{Graph, NodeId};
use crate::error::NeuraGradError;
use std::fmt;
use std::str::FromStr;

/// Nonlinearity applied to a neuron's pre-activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Activation {
    /// Identity: the pre-activation is returned unchanged.
    #[default]
    Linear,
    Relu,
    Tanh,
    Sigmoid,
}

impl Activation {
    /// Applies the activation to `x`. `Linear` pushes no node.
    pub fn apply(self, graph: &mut Graph, x: NodeId) -> Result<NodeId, NeuraGradError> {
        match self {
            Activation::Linear => {
                graph.check(x)?;
                Ok(x)
            }
            Activation::Relu => graph.relu(x),
            Activation::Tanh => graph.tanh(x),
            Activation::Sigmoid => graph.sigmoid(x),
        }
    }
}

impl FromStr for Activation {
    type Err = NeuraGradError;

    /// Parses the lowercase tags `""`/`"linear"`, `"relu"`, `"tanh"` and `"sigmoid"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "linear" => Ok(Activation::Linear),
            "relu" => Ok(Activation::Relu),
            "tanh" => Ok(Activation::Tanh),
            "sigmoid" => Ok(Activation::Sigmoid),
            other => Err(NeuraGradError::UnsupportedActivation(other.to_string())),
        }
    }
}

impl fmt::Display for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Activation::Linear => "linear",
            Activation::Relu => "relu",
            Activation::Tanh => "tanh",
            Activation::Sigmoid => "sigmoid",
        };
        f.write_str(name)
    }
}
