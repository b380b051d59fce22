// neuragrad-core/src/optim/mod.rs

//! Optimizers for training neural networks.
//!
//! This module provides the `Optimizer` trait, plain gradient descent
//! (`SgdOptimizer`) and learning rate schedulers driving an optimizer's
//! learning rate from the epoch number.

pub mod lr_scheduler;
pub mod optimizer_trait;
pub mod sgd;

// Re-export key items for easier access
pub use lr_scheduler::{LRScheduler, LinearDecayLR};
pub use optimizer_trait::Optimizer;
pub use sgd::SgdOptimizer;

// Declare test module conditionally
#[cfg(test)]
mod sgd_test;
