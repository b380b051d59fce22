// Déclare les modules principaux de la crate
pub mod autograd;
pub mod ops;

pub mod nn;
pub mod optim;
pub mod train;

pub mod error;

// Ré-exporte les types centraux pour qu'ils soient accessibles via `neuragrad_core::Graph`
pub use autograd::{Checkpoint, Graph, GraphOptions, Node, NodeId};
pub use error::NeuraGradError;
pub use ops::Operand;
