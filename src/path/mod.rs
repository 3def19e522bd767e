//! Dot path handling for dotopts.
//!
//! This module handles:
//! - Converting dot paths to nested trees and back
//! - Normalizing mappings with dotted keys
//! - Looking up and searching values by path
//! - Slicing paths by level

pub mod codec;
pub mod level;
pub mod resolve;

pub use codec::{SEPARATOR, normalize, path_to_tree, split_path, tree_to_path};
pub use level::{parent_path, path_segment, path_slice};
pub use resolve::{find_paths, get_or, resolve};
