pub mod moons;
pub mod traits;
pub mod vec_dataset;

pub use moons::{linspace, make_moons, Moons};
pub use traits::Dataset;
pub use vec_dataset::VecDataset;
