// Foundational arithmetic operations, implemented as `Graph` methods.
pub mod add;
pub mod mul;
pub mod neg;
pub mod pow;
pub mod sub;
