//! Datasets feeding the scalar training loop of `neuragrad-core`.
//!
//! Samples are plain numbers; they are lifted into graph leaves by the
//! consumer (see `Trainer::fit`).

pub mod datasets;

// Re-export main components
pub use datasets::{linspace, make_moons, Dataset, Moons, VecDataset};
