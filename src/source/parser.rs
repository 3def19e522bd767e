use crate::error::{OptionsError, Result};
use crate::tree::{Tree, Value};
use std::path::Path;

/// Parse an options file from the given path.
pub fn parse_source_file(path: &Path) -> Result<Tree> {
	let content = std::fs::read_to_string(path).map_err(|source| OptionsError::SourceRead {
		path: path.to_path_buf(),
		source,
	})?;

	parse_source_str(&content, path)
}

/// Parse TOML options from a string (useful for testing).
///
/// The result is raw: quoted dotted keys such as `"a.b" = 1` are kept as
/// written and only expanded once the tree is handed to a store.
pub fn parse_source_str(content: &str, path: &Path) -> Result<Tree> {
	let table: toml::Table =
		toml::from_str(content).map_err(|source| OptionsError::SourceParse {
			path: path.to_path_buf(),
			source,
		})?;

	table_to_tree(table, "")
}

fn table_to_tree(table: toml::Table, prefix: &str) -> Result<Tree> {
	let mut tree = Tree::new();
	for (key, value) in table {
		let full_key = if prefix.is_empty() {
			key.clone()
		} else {
			format!("{}.{}", prefix, key)
		};
		let value = match value {
			toml::Value::String(s) => Value::String(s),
			toml::Value::Integer(i) => Value::Integer(i),
			toml::Value::Float(f) => Value::Float(f),
			toml::Value::Boolean(b) => Value::Bool(b),
			toml::Value::Datetime(dt) => Value::String(dt.to_string()),
			toml::Value::Table(sub) => Value::Tree(table_to_tree(sub, &full_key)?),
			toml::Value::Array(_) => {
				return Err(OptionsError::UnsupportedValue {
					key: full_key,
					kind: "array",
				});
			}
		};
		tree.insert(key, value);
	}
	Ok(tree)
}

/// Parse a single command-line value as a TOML scalar.
///
/// `true`, `3`, `1.5` and `"quoted"` keep their types; anything that is not a
/// valid TOML scalar is taken as a raw string.
pub fn parse_scalar(raw: &str) -> Value {
	match toml::from_str::<toml::Table>(&format!("v = {}", raw)) {
		Ok(mut table) => match table.remove("v") {
			Some(toml::Value::String(s)) => Value::String(s),
			Some(toml::Value::Integer(i)) => Value::Integer(i),
			Some(toml::Value::Float(f)) => Value::Float(f),
			Some(toml::Value::Boolean(b)) => Value::Bool(b),
			_ => Value::String(raw.to_string()),
		},
		Err(_) => Value::String(raw.to_string()),
	}
}
