//! # Scalar Operations Module (`ops`)
//!
//! Every operation is a method on [`Graph`](crate::autograd::Graph) that reads
//! its operands, computes the forward value eagerly and pushes a derived node
//! tagged with the matching [`Op`](crate::autograd::Op). The local gradient
//! rules live next to the tag in `autograd::backward_op`.
//!
//! ## Key Submodules:
//!
//! - [`arithmetic`]: add, mul, neg, sub, pow.
//! - [`math_elem`]: natural logarithm (clamped).
//! - [`activation`]: ReLU, tanh, sigmoid.
//!
//! The second operand of `add`, `mul` and `sub` may be a node or a plain
//! number; numbers are lifted into fresh leaves (see [`Operand`]).

pub mod activation;
pub mod arithmetic;
pub mod math_elem;
pub mod operand;

pub use operand::Operand;
