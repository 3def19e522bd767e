use crate::tree::value::{Tree, Value};

/// Deep-merge `incoming` into `base`.
///
/// Where both sides hold a tree the merge recurses; otherwise the incoming
/// value replaces the base value, whatever either type is. Keys only present
/// in `base` survive. Resulting order is base order followed by new incoming
/// keys in their given order.
pub fn merge(mut base: Tree, incoming: Tree) -> Tree {
	merge_into(&mut base, incoming);
	base
}

/// In-place form of [`merge`].
pub fn merge_into(base: &mut Tree, incoming: Tree) {
	for (key, value) in incoming {
		if let Value::Tree(sub) = value {
			if let Some(Value::Tree(existing)) = base.get_mut(&key) {
				merge_into(existing, sub);
			} else {
				base.insert(key, sub);
			}
		} else {
			base.insert(key, value);
		}
	}
}

/// Merge `incoming` into `base`, writing only where `base` has nothing yet.
///
/// Existing values are never replaced: a scalar in `base` blocks an incoming
/// tree at the same key and a tree in `base` blocks an incoming scalar.
pub fn merge_only_undefined(mut base: Tree, incoming: Tree) -> Tree {
	merge_only_undefined_into(&mut base, incoming);
	base
}

/// In-place form of [`merge_only_undefined`].
pub fn merge_only_undefined_into(base: &mut Tree, incoming: Tree) {
	for (key, value) in incoming {
		match base.get_mut(&key) {
			None => {
				base.insert(key, value);
			}
			Some(Value::Tree(existing)) => {
				if let Value::Tree(sub) = value {
					merge_only_undefined_into(existing, sub);
				}
			}
			Some(_) => {}
		}
	}
}
