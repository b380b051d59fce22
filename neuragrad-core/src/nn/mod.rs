// src/nn/mod.rs
// Neural network building blocks on top of the scalar graph.

pub mod activation;
pub mod init;
pub mod layers;
pub mod losses;
pub mod module; // Trait Module

// Re-export common items
pub use activation::Activation;
pub use layers::{Layer, Mlp, Neuron};
pub use losses::{binary_cross_entropy, hinge_loss, l2_penalty, mse_loss, Loss};
pub use module::Module;
