//! Utilities for benchmarking the linear algebra types.

#[macro_use]
mod macros;

pub mod benchmark;

#[doc(hidden)]
pub use pastey;
