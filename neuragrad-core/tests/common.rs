use neuragrad_core::{Graph, NeuraGradError, NodeId};

// Shared helpers for the integration tests. Each test binary only uses part of
// them, hence the allow(dead_code).

#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Builds `tanh(a * b) + relu(a - c) ** 2 + sigmoid(log(b)) * c`, an
/// expression touching every operation and sharing `a`, `b` and `c`.
#[allow(dead_code)]
pub fn composite(graph: &mut Graph, inputs: &[NodeId]) -> Result<NodeId, NeuraGradError> {
    let (a, b, c) = (inputs[0], inputs[1], inputs[2]);
    let ab = graph.mul(a, b)?;
    let t = graph.tanh(ab)?;
    let a_minus_c = graph.sub(a, c)?;
    let r = graph.relu(a_minus_c)?;
    let r2 = graph.pow(r, 2.0)?;
    let log_b = graph.log(b)?;
    let s = graph.sigmoid(log_b)?;
    let sc = graph.mul(s, c)?;
    let partial = graph.add(t, r2)?;
    graph.add(partial, sc)
}

/// Reads the gradient of every id.
#[allow(dead_code)]
pub fn grads(graph: &Graph, ids: &[NodeId]) -> Result<Vec<f64>, NeuraGradError> {
    ids.iter().map(|&id| graph.grad(id)).collect()
}
