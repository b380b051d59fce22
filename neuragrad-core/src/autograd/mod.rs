//! # Automatic Differentiation (`autograd`)
//!
//! Scalar reverse-mode differentiation over an arena-backed DAG.
//!
//! - [`Graph`] owns every node and runs the backward pass.
//! - [`Node`] / [`NodeId`]: one scalar entry and its stable handle.
//! - [`Op`]: the tag recording how a node was derived, with its gradient rule.
//! - [`grad_check`]: finite-difference verification of the rules.

pub mod backward_op;
pub mod grad_check;
pub mod graph;
pub mod node;

pub use backward_op::Op;
pub use graph::{Checkpoint, Graph, GraphOptions};
pub use node::{Node, NodeId};
