//! Allocation and collection types for rectmesh.
//!
//! - `HashSet` backed by AHash
//! - [`SparseSet`] storage addressed by generational [`IndexSlot`]s

pub mod sparse_set;

pub use ahash::AHashSet as HashSet;
pub use sparse_set::{IndexSlot, SparseSet};
