// Element-wise math functions on scalar nodes.
pub mod ln;
