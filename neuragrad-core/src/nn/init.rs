use crate::autograd::{Graph, NodeId};
use rand::Rng;
use rand_distr::StandardNormal;

/// Creates `count` leaves filled with the scalar value 0.
pub fn zeros(graph: &mut Graph, count: usize) -> Vec<NodeId> {
    full(graph, count, 0.0)
}

/// Creates `count` leaves filled with `value`.
pub fn full(graph: &mut Graph, count: usize, value: f64) -> Vec<NodeId> {
    (0..count).map(|_| graph.leaf(value)).collect()
}

/// Creates `count` leaves sampled from the standard normal distribution.
///
/// The generator is passed in so that seeded runs are reproducible.
pub fn randn<R: Rng + ?Sized>(graph: &mut Graph, count: usize, rng: &mut R) -> Vec<NodeId> {
    (0..count)
        .map(|_| {
            let value: f64 = rng.sample(StandardNormal);
            graph.leaf(value)
        })
        .collect()
}

#[cfg(test)]
#[path = "init_test.rs"]
mod tests;
