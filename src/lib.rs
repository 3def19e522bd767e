//! dotopts - nested option store addressed by dot-separated paths.
//!
//! This library provides:
//! - An ordered option tree with deep merge and prune operations
//! - Conversion between dot paths and nested trees
//! - Path lookup, search and level helpers
//! - `OptionStore`, plus a process-wide default store
//! - Loading raw option data from TOML files
//!
//! # Example
//!
//! ```
//! use dotopts::{OptionStore, Tree, Value};
//!
//! let data: Tree = [("a.b", "ab-value"), ("x", "x-value")].into_iter().collect();
//! let mut store = OptionStore::with_options(data).unwrap();
//!
//! assert_eq!(store.get_option("a.b"), Some(&Value::from("ab-value")));
//!
//! store.unset_option("a.b").unwrap();
//! assert!(!store.contains("a"));
//! assert_eq!(store.get_option_or("a.b", "fallback"), Value::from("fallback"));
//! ```

pub mod error;
pub mod path;
pub mod source;
pub mod store;
pub mod tree;

#[cfg(test)]
mod proptests;

pub use error::{OptionsError, Result};
pub use store::OptionStore;
pub use tree::{Tree, Value};
