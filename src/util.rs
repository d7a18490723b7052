//! Small concurrency and lookup helpers shared by the signature subsystem.

pub mod cached;
pub mod lookup;

pub use cached::*;
pub use lookup::*;
