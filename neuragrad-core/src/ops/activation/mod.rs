//! # Activation Functions
//!
//! Non-linear scalar functions used by neurons.
//!
//! ## Currently Implemented:
//! - [`Graph::relu`](crate::autograd::Graph::relu): Rectified Linear Unit.
//! - [`Graph::tanh`](crate::autograd::Graph::tanh): hyperbolic tangent.
//! - [`Graph::sigmoid`](crate::autograd::Graph::sigmoid): logistic sigmoid.

pub mod relu;
pub mod sigmoid;
pub mod tanh;
