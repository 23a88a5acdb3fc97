//! Reference storage implementations.

pub mod memory;

pub use memory::{MemoryDirectory, MemoryHistory};
