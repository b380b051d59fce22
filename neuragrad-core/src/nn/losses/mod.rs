//! # Loss Functions
//!
//! Losses quantify the difference between the model's predictions and the
//! target values. Each one reduces a batch to a single node by averaging
//! per-sample terms, so a backward pass from the returned node trains every
//! parameter that contributed to a prediction.
//!
//! Targets are nodes too (usually leaves lifted from the dataset), which is
//! what lets a loss treat `1 - y` as an ordinary graph expression.

pub mod bce;
pub mod hinge;
pub mod l2;
pub mod mse;

pub use bce::binary_cross_entropy;
pub use hinge::hinge_loss;
pub use l2::l2_penalty;
pub use mse::mse_loss;

use crate::autograd::{Graph, NodeId};
use crate::error::NeuraGradError;
use std::fmt;
use std::str::FromStr;

/// Selects one of the data losses by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Loss {
    MeanSquaredError,
    Hinge,
    BinaryCrossEntropy,
}

impl Loss {
    /// Builds the loss node for a batch of targets and predictions.
    pub fn compute(
        self,
        graph: &mut Graph,
        y_true: &[NodeId],
        y_pred: &[NodeId],
    ) -> Result<NodeId, NeuraGradError> {
        match self {
            Loss::MeanSquaredError => mse_loss(graph, y_true, y_pred),
            Loss::Hinge => hinge_loss(graph, y_true, y_pred),
            Loss::BinaryCrossEntropy => binary_cross_entropy(graph, y_true, y_pred),
        }
    }
}

impl FromStr for Loss {
    type Err = NeuraGradError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mse" => Ok(Loss::MeanSquaredError),
            "hinge" => Ok(Loss::Hinge),
            "bce" => Ok(Loss::BinaryCrossEntropy),
            other => Err(NeuraGradError::UnsupportedLoss(other.to_string())),
        }
    }
}

impl fmt::Display for Loss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Loss::MeanSquaredError => "mse",
            Loss::Hinge => "hinge",
            Loss::BinaryCrossEntropy => "bce",
        };
        f.write_str(name)
    }
}

/// Validates a target/prediction pair and returns the batch size.
pub(crate) fn batch_size(
    y_true: &[NodeId],
    y_pred: &[NodeId],
    operation: &str,
) -> Result<usize, NeuraGradError> {
    if y_true.len() != y_pred.len() {
        return Err(NeuraGradError::DimensionMismatch {
            expected: y_true.len(),
            actual: y_pred.len(),
            operation: operation.to_string(),
        });
    }
    if y_true.is_empty() {
        return Err(NeuraGradError::EmptyInput {
            operation: operation.to_string(),
        });
    }
    Ok(y_true.len())
}
