use crate::autograd::{Graph, NodeId};
use crate::error::NeuraGradError;
use approx::relative_eq;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: analytical grad {analytical_grad:?} != numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(NeuraGradError),
    #[error("Backward pass execution failed during gradient check: {0}")]
    BackwardPassError(NeuraGradError),
    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },
    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
    #[error("Graph error during intermediate calculation: {0}")]
    GraphError(NeuraGradError),
}

impl From<NeuraGradError> for GradCheckError {
    fn from(err: NeuraGradError) -> Self {
        GradCheckError::GraphError(err)
    }
}

/// Builds `func` on a fresh graph whose leaves hold `inputs` and returns the
/// output value.
fn evaluate<F>(func: &F, inputs: &[f64]) -> Result<f64, GradCheckError>
where
    F: Fn(&mut Graph, &[NodeId]) -> Result<NodeId, NeuraGradError>,
{
    let mut graph = Graph::new();
    let leaves = graph.leaves(inputs);
    let output = func(&mut graph, &leaves).map_err(GradCheckError::ForwardPassError)?;
    Ok(graph.value(output)?)
}

/// Checks analytical gradients against numerical gradients using central
/// finite differences.
///
/// `func` receives a fresh graph and one leaf per entry of `inputs` and must
/// return a scalar output node. The analytical gradient of each input comes
/// from a single backward pass; the numerical one is
/// `(f(x + eps) - f(x - eps)) / (2 * eps)`. Values agree when they are within
/// `tolerance` either absolutely or relatively.
pub fn check_grad<F>(
    func: F,
    inputs: &[f64],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&mut Graph, &[NodeId]) -> Result<NodeId, NeuraGradError>,
{
    // --- 1. Analytical gradients ---
    let mut graph = Graph::new();
    let leaves = graph.leaves(inputs);
    let output = func(&mut graph, &leaves).map_err(GradCheckError::ForwardPassError)?;
    graph
        .backward(output)
        .map_err(GradCheckError::BackwardPassError)?;

    // --- 2. Numerical gradients, one input at a time ---
    for (i, &leaf) in leaves.iter().enumerate() {
        let analytical = graph.grad(leaf)?;
        if !analytical.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index: i,
                value: analytical,
            });
        }

        let mut plus = inputs.to_vec();
        plus[i] += epsilon;
        let mut minus = inputs.to_vec();
        minus[i] -= epsilon;
        let loss_plus = evaluate(&func, &plus)?;
        let loss_minus = evaluate(&func, &minus)?;

        let numerical = (loss_plus - loss_minus) / (2.0 * epsilon);
        if !numerical.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index: i,
                loss_plus,
                loss_minus,
            });
        }

        if !relative_eq!(
            analytical,
            numerical,
            epsilon = tolerance,
            max_relative = tolerance
        ) {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical_grad: analytical,
                numerical_grad: numerical,
                difference: (analytical - numerical).abs(),
            });
        }
    }

    Ok(())
}
