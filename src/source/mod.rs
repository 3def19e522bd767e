//! Loading raw option data from TOML.
//!
//! This module handles:
//! - TOML options file parsing
//! - Layering several files into one store
//! - Parsing single scalar values given on the command line

pub mod layers;
pub mod parser;

pub use layers::{apply_defaults, load_layered};
pub use parser::{parse_scalar, parse_source_file, parse_source_str};
