use crate::path::{normalize, path_to_tree, resolve, tree_to_path};
use crate::store::OptionStore;
use crate::tree::{Tree, Value, flatten, merge, merge_only_undefined, prune};

use proptest::prelude::*;

fn no_null_or_empty(tree: &Tree) -> bool {
	tree.iter().all(|(_, value)| match value {
		Value::Null => false,
		Value::Tree(sub) => !sub.is_empty() && no_null_or_empty(sub),
		_ => true,
	})
}

fn key_strategy() -> impl Strategy<Value = String> + Clone {
	"[a-e]{1,3}"
}

fn path_strategy() -> impl Strategy<Value = String> {
	prop::collection::vec(key_strategy(), 1..5).prop_map(|segments| segments.join("."))
}

fn scalar_strategy() -> BoxedStrategy<Value> {
	prop_oneof![
		any::<bool>().prop_map(Value::Bool),
		any::<i64>().prop_map(Value::Integer),
		(-1.0e6f64..1.0e6).prop_map(Value::Float),
		"[a-z]{0,5}".prop_map(Value::String),
	]
	.boxed()
}

fn tree_from(leaf: BoxedStrategy<Value>) -> impl Strategy<Value = Tree> {
	let value = leaf.prop_recursive(3, 32, 4, |inner| {
		prop::collection::vec((key_strategy(), inner), 0..4)
			.prop_map(|entries| Value::Tree(entries.into_iter().collect()))
	});
	prop::collection::vec((key_strategy(), value), 0..5)
		.prop_map(|entries| entries.into_iter().collect())
}

fn tree_strategy() -> impl Strategy<Value = Tree> {
	tree_from(scalar_strategy())
}

fn tree_with_nulls_strategy() -> impl Strategy<Value = Tree> {
	tree_from(prop_oneof![Just(Value::Null), scalar_strategy()].boxed())
}

fn prefixed(tree: Tree, prefix: &str) -> Tree {
	tree.into_iter()
		.map(|(key, value)| (format!("{}{}", prefix, key), value))
		.collect()
}

#[derive(Debug, Clone)]
enum Op {
	Set(String, Value),
	Update(String, Value),
	Unset(String),
}

fn ops_strategy() -> impl Strategy<Value = Vec<Op>> {
	let op = prop_oneof![
		(path_strategy(), scalar_strategy()).prop_map(|(p, v)| Op::Set(p, v)),
		(path_strategy(), scalar_strategy()).prop_map(|(p, v)| Op::Update(p, v)),
		path_strategy().prop_map(Op::Unset),
	];
	prop::collection::vec(op, 0..40)
}

proptest! {
	#![proptest_config(ProptestConfig {
		cases: 256,
		.. ProptestConfig::default()
	})]

	#[test]
	fn prop_spine_round_trip(path in path_strategy(), value in scalar_strategy()) {
		let tree = path_to_tree(&path, value).unwrap();
		prop_assert_eq!(tree_to_path(&tree), path);
	}

	#[test]
	fn prop_merge_idempotent(a in tree_strategy()) {
		prop_assert_eq!(merge(a.clone(), a.clone()), a);
	}

	#[test]
	fn prop_merge_associative_on_disjoint_keys(
		a in tree_strategy(),
		b in tree_strategy(),
		c in tree_strategy()
	) {
		let (a, b, c) = (prefixed(a, "x"), prefixed(b, "y"), prefixed(c, "z"));
		let left = merge(merge(a.clone(), b.clone()), c.clone());
		let right = merge(a, merge(b, c));
		prop_assert_eq!(left, right);
	}

	#[test]
	fn prop_merge_only_undefined_keeps_leaves(base in tree_strategy(), incoming in tree_strategy()) {
		let merged = merge_only_undefined(base.clone(), incoming);
		for (path, value) in flatten(&base) {
			prop_assert_eq!(resolve(&merged, &path), Some(&value));
		}
	}

	#[test]
	fn prop_prune_leaves_no_null_or_empty(tree in tree_with_nulls_strategy()) {
		let pruned = prune(tree);
		prop_assert!(no_null_or_empty(&pruned));
		prop_assert_eq!(prune(pruned.clone()), pruned);
	}

	#[test]
	fn prop_normalize_inverts_flatten(tree in tree_strategy()) {
		let tree = prune(tree);
		let dotted: Tree = flatten(&tree).into_iter().collect();
		prop_assert_eq!(normalize(dotted).unwrap(), tree);
	}

	#[test]
	fn prop_store_ops_keep_invariants(ops in ops_strategy()) {
		let mut store = OptionStore::new();
		for op in ops {
			match op {
				Op::Set(path, value) => {
					store.set_option(&path, value.clone()).unwrap();
					prop_assert_eq!(store.get_option(&path), Some(&value));
				}
				Op::Update(path, value) => {
					store.update_option(&path, value.clone()).unwrap();
					prop_assert_eq!(store.get_option(&path), Some(&value));
				}
				Op::Unset(path) => {
					store.unset_option(&path).unwrap();
					prop_assert_eq!(store.get_option(&path), None);
				}
			}
			prop_assert!(no_null_or_empty(store.options()));
		}
	}
}
