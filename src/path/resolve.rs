use crate::path::codec::SEPARATOR;
use crate::tree::{Tree, Value};

/// Look up the value stored at `path`.
///
/// Returns `None` as soon as a segment is missing or the walk hits a scalar.
/// A malformed path can never be stored, so it resolves to `None` as well.
pub fn resolve<'a>(tree: &'a Tree, path: &str) -> Option<&'a Value> {
	let mut segments = path.split(SEPARATOR);
	let first = segments.next()?;
	if first.is_empty() {
		return None;
	}
	let mut current = tree.get(first)?;
	for segment in segments {
		current = current.as_tree()?.get(segment)?;
	}
	Some(current)
}

/// Like [`resolve`], falling back to `fallback` when nothing is found.
pub fn get_or<'a>(tree: &'a Tree, path: &str, fallback: &'a Value) -> &'a Value {
	resolve(tree, path).unwrap_or(fallback)
}

/// Keep only the parts of `tree` that mention `needle`.
///
/// A tree entry whose key contains `needle` is kept whole; otherwise the
/// entry survives if something beneath it matches. Scalars match on their
/// text form. `None` means nothing matched, which is distinct from a match
/// on an entry holding an empty tree.
pub fn find_paths(needle: &str, tree: &Tree) -> Option<Tree> {
	let mut found = Tree::new();
	for (key, value) in tree.iter() {
		match value {
			Value::Tree(sub) => {
				if key.contains(needle) {
					found.insert(key, sub.clone());
				} else if let Some(matched) = find_paths(needle, sub) {
					found.insert(key, matched);
				}
			}
			scalar => {
				if scalar
					.scalar_text()
					.is_some_and(|text| text.contains(needle))
				{
					found.insert(key, scalar.clone());
				}
			}
		}
	}
	if found.is_empty() { None } else { Some(found) }
}
