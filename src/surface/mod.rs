//! Host surface implementations.

pub mod memory;

pub use memory::{FormatSpan, MemorySurface};
