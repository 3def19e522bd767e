use crate::error::{OptionsError, Result};
use crate::tree::{Tree, Value, merge_into};

/// Separator between path segments.
pub const SEPARATOR: char = '.';

/// Split a dot path into its segments, rejecting empty ones.
///
/// `""`, `".a"`, `"a."` and `"a..b"` all fail with [`OptionsError::InvalidPath`].
pub fn split_path(path: &str) -> Result<Vec<&str>> {
	let segments: Vec<&str> = path.split(SEPARATOR).collect();
	if segments.iter().any(|s| s.is_empty()) {
		return Err(OptionsError::InvalidPath {
			path: path.to_string(),
		});
	}
	Ok(segments)
}

/// Build the single-spine tree that places `value` at `path`.
///
/// `path_to_tree("a.b.c", v)` gives `{a: {b: {c: v}}}`. A tree value is
/// normalized first, so dotted keys inside it are expanded as well.
pub fn path_to_tree(path: &str, value: impl Into<Value>) -> Result<Tree> {
	let segments = split_path(path)?;
	let value = match value.into() {
		Value::Tree(tree) => Value::Tree(normalize(tree)?),
		other => other,
	};

	let mut segments = segments.into_iter().rev();
	// split always yields at least one segment
	let leaf = segments.next().unwrap_or(path);
	let mut tree = Tree::single(leaf, value);
	for segment in segments {
		tree = Tree::single(segment, tree);
	}
	Ok(tree)
}

/// Walk the first key at each level and join the keys with `.`.
///
/// Stops at a scalar or an empty tree. Only the first entry of each level is
/// explored, so on trees that branch the result is the leftmost spine.
/// Keys are joined verbatim, dots included.
pub fn tree_to_path(tree: &Tree) -> String {
	let mut keys = Vec::new();
	let mut current = tree;
	while let Some((key, value)) = current.first() {
		keys.push(key);
		match value {
			Value::Tree(sub) => current = sub,
			_ => break,
		}
	}
	keys.join(".")
}

/// Expand every dotted key in `data` into nesting, recursively.
///
/// Fragments are merged in order, so a later key wins over an earlier one
/// while sibling trees combine instead of replacing each other.
pub fn normalize(data: Tree) -> Result<Tree> {
	let mut result = Tree::new();
	for (key, value) in data {
		let value = match value {
			Value::Tree(sub) => Value::Tree(normalize(sub)?),
			other => other,
		};
		let fragment = if key.contains(SEPARATOR) {
			log::trace!("expanding dotted key {:?}", key);
			path_to_tree(&key, value)?
		} else {
			if key.is_empty() {
				return Err(OptionsError::InvalidPath { path: key });
			}
			Tree::single(key, value)
		};
		merge_into(&mut result, fragment);
	}
	Ok(result)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_path_to_tree() {
		let tree = path_to_tree("a.b.c", "val").unwrap();
		let expected = Tree::single("a", Tree::single("b", Tree::single("c", "val")));
		assert_eq!(tree, expected);
	}

	#[test]
	fn test_path_to_tree_single_segment() {
		assert_eq!(path_to_tree("key", 1).unwrap(), Tree::single("key", 1));
	}

	#[test]
	fn test_path_to_tree_normalizes_tree_value() {
		let value = Tree::single("x.y", true);
		let tree = path_to_tree("a", value).unwrap();
		assert_eq!(
			tree,
			Tree::single("a", Tree::single("x", Tree::single("y", true)))
		);
	}

	#[test]
	fn test_malformed_paths_rejected() {
		for path in ["", ".a", "a.", "a..b", "."] {
			let result = path_to_tree(path, 1);
			match result {
				Err(OptionsError::InvalidPath { path: p }) => assert_eq!(p, path),
				other => panic!("Expected InvalidPath for {:?}, got {:?}", path, other),
			}
		}
	}

	#[test]
	fn test_tree_to_path() {
		let tree = Tree::single("b", Tree::single("ba", "ba-value"));
		assert_eq!(tree_to_path(&tree), "b.ba");
	}

	#[test]
	fn test_tree_to_path_keeps_dotted_keys() {
		let tree = Tree::single("a.ab.abc", Tree::single("abcd", "abcd-value"));
		assert_eq!(tree_to_path(&tree), "a.ab.abc.abcd");
	}

	#[test]
	fn test_tree_to_path_follows_first_key() {
		let tree: Tree = [
			("a", Value::from(Tree::single("b", 1))),
			("z", Value::from(Tree::single("y", 2))),
		]
		.into_iter()
		.collect();
		assert_eq!(tree_to_path(&tree), "a.b");
	}

	#[test]
	fn test_tree_to_path_stops_at_empty_tree() {
		let tree = Tree::single("a", Tree::new());
		assert_eq!(tree_to_path(&tree), "a");
		assert_eq!(tree_to_path(&Tree::new()), "");
	}

	#[test]
	fn test_normalize() {
		let data: Tree = [
			("a", Value::from(Tree::single("b.c", "x"))),
			("x.y", Value::from("1")),
			("x.z", Value::from("2")),
		]
		.into_iter()
		.collect();

		let expected: Tree = [
			("a", Value::from(Tree::single("b", Tree::single("c", "x")))),
			(
				"x",
				Value::from(
					[("y", "1"), ("z", "2")]
						.into_iter()
						.collect::<Tree>(),
				),
			),
		]
		.into_iter()
		.collect();

		assert_eq!(normalize(data).unwrap(), expected);
	}

	#[test]
	fn test_normalize_later_key_wins() {
		let data: Tree = [
			("a", Value::from(Tree::single("b", "first"))),
			("a.b", Value::from("second")),
		]
		.into_iter()
		.collect();

		assert_eq!(
			normalize(data).unwrap(),
			Tree::single("a", Tree::single("b", "second"))
		);
	}

	#[test]
	fn test_normalize_empty() {
		assert!(normalize(Tree::new()).unwrap().is_empty());
	}

	#[test]
	fn test_normalize_rejects_malformed_key() {
		let data = Tree::single("a..b", 1);
		assert!(matches!(
			normalize(data),
			Err(OptionsError::InvalidPath { .. })
		));
	}
}
