//! The option tree and the operations that reshape it.
//!
//! This module handles:
//! - The `Value`/`Tree` data model
//! - Deep merging (overwriting and fill-only variants)
//! - Pruning of null and empty entries
//! - Flattening back to dot paths

pub mod merge;
pub mod prune;
pub mod value;

pub use merge::{merge, merge_into, merge_only_undefined, merge_only_undefined_into};
pub use prune::{flatten, prune, prune_in_place};
pub use value::{Tree, Value};
