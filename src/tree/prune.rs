use crate::tree::value::{Tree, Value};

/// Remove every `Null` entry and every tree left empty, bottom-up.
///
/// Children are pruned before their parent is inspected, so a parent that only
/// held removable entries disappears too. `false`, `0` and `""` are kept.
pub fn prune(mut tree: Tree) -> Tree {
	prune_in_place(&mut tree);
	tree
}

/// In-place form of [`prune`].
pub fn prune_in_place(tree: &mut Tree) {
	tree.retain(|_, value| match value {
		Value::Null => false,
		Value::Tree(sub) => {
			prune_in_place(sub);
			!sub.is_empty()
		}
		_ => true,
	});
}

/// Every leaf of `tree` paired with its full dot path, depth-first in tree order.
pub fn flatten(tree: &Tree) -> Vec<(String, Value)> {
	let mut leaves = Vec::new();
	flatten_into(tree, "", &mut leaves);
	leaves
}

fn flatten_into(tree: &Tree, prefix: &str, leaves: &mut Vec<(String, Value)>) {
	for (key, value) in tree.iter() {
		let path = if prefix.is_empty() {
			key.to_string()
		} else {
			format!("{}.{}", prefix, key)
		};
		match value {
			Value::Tree(sub) => flatten_into(sub, &path, leaves),
			leaf => leaves.push((path, leaf.clone())),
		}
	}
}
