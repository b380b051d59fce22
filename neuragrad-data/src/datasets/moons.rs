use super::traits::Dataset;
use neuragrad_core::NeuraGradError;
use rand::Rng;
use rand_distr::StandardNormal;
use std::f64::consts::PI;

/// `n` evenly spaced values from `start` to `end`, both included.
///
/// A single sample yields `[start]`; zero samples yield an empty vector.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n).map(|i| start + i as f64 * step).collect()
        }
    }
}

/// Two interleaving half circles, a toy binary classification problem.
#[derive(Debug, Clone, PartialEq)]
pub struct Moons {
    /// One `[x, y]` row per sample.
    pub features: Vec<Vec<f64>>,
    /// `0.0` for the outer moon, `1.0` for the inner one.
    pub labels: Vec<f64>,
}

/// Generates the two-moons dataset.
///
/// The first `num_samples / 2` samples lie on the outer half circle
/// `(cos t, sin t)` and are labelled 0; the rest lie on the inner one
/// `(1 - cos t, 1 - sin t - 0.5)` and are labelled 1, with `t` evenly spaced
/// over `[0, pi]` within each moon. Every coordinate gets independent Gaussian
/// noise with standard deviation `noise`.
pub fn make_moons<R: Rng + ?Sized>(num_samples: usize, noise: f64, rng: &mut R) -> Moons {
    let num_out = num_samples / 2;
    let num_in = num_samples - num_out;

    let mut features = Vec::with_capacity(num_samples);
    let mut labels = Vec::with_capacity(num_samples);
    for t in linspace(0.0, PI, num_out) {
        features.push(vec![t.cos(), t.sin()]);
        labels.push(0.0);
    }
    for t in linspace(0.0, PI, num_in) {
        features.push(vec![1.0 - t.cos(), 1.0 - t.sin() - 0.5]);
        labels.push(1.0);
    }

    for row in features.iter_mut() {
        for v in row.iter_mut() {
            let z: f64 = rng.sample(StandardNormal);
            *v += z * noise;
        }
    }
    log::debug!(
        "generated {} moons samples ({} outer, {} inner, noise {})",
        num_samples,
        num_out,
        num_in,
        noise
    );

    Moons { features, labels }
}

impl Moons {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl Dataset for Moons {
    type Item = (Vec<f64>, f64);

    fn get(&self, index: usize) -> Result<Self::Item, NeuraGradError> {
        match (self.features.get(index), self.labels.get(index)) {
            (Some(x), Some(&y)) => Ok((x.clone(), y)),
            _ => Err(NeuraGradError::IndexOutOfBounds {
                index,
                len: self.len(),
            }),
        }
    }

    fn len(&self) -> usize {
        Moons::len(self)
    }
}

#[cfg(test)]
#[path = "moons_test.rs"]
mod tests;
