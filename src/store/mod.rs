//! The public option store.
//!
//! This module handles:
//! - `OptionStore`, the injectable instance form
//! - `global`, a process-wide default with an explicit init/reset lifecycle

pub mod global;
pub mod options;

pub use options::OptionStore;
