use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;

/// A single option value: a scalar or a nested tree.
///
/// `Null` only appears in incoming data, where it marks a path for removal.
/// Trees held by an [`OptionStore`](crate::store::OptionStore) never contain it.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
	#[default]
	Null,
	Bool(bool),
	Integer(i64),
	Float(f64),
	String(String),
	Tree(Tree),
}

impl Value {
	pub fn is_null(&self) -> bool {
		matches!(self, Value::Null)
	}

	pub fn as_tree(&self) -> Option<&Tree> {
		match self {
			Value::Tree(tree) => Some(tree),
			_ => None,
		}
	}

	pub fn as_tree_mut(&mut self) -> Option<&mut Tree> {
		match self {
			Value::Tree(tree) => Some(tree),
			_ => None,
		}
	}

	pub fn as_str(&self) -> Option<&str> {
		match self {
			Value::String(s) => Some(s),
			_ => None,
		}
	}

	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Value::Bool(b) => Some(*b),
			_ => None,
		}
	}

	pub fn as_integer(&self) -> Option<i64> {
		match self {
			Value::Integer(i) => Some(*i),
			_ => None,
		}
	}

	pub fn as_float(&self) -> Option<f64> {
		match self {
			Value::Float(f) => Some(*f),
			_ => None,
		}
	}

	/// Name of the variant, for diagnostics.
	pub fn kind(&self) -> &'static str {
		match self {
			Value::Null => "null",
			Value::Bool(_) => "bool",
			Value::Integer(_) => "integer",
			Value::Float(_) => "float",
			Value::String(_) => "string",
			Value::Tree(_) => "tree",
		}
	}

	/// The text a scalar is matched against when searching.
	///
	/// Trees have no scalar form and return `None`.
	pub fn scalar_text(&self) -> Option<String> {
		match self {
			Value::Null => Some(String::new()),
			Value::Bool(b) => Some(b.to_string()),
			Value::Integer(i) => Some(i.to_string()),
			Value::Float(f) => Some(f.to_string()),
			Value::String(s) => Some(s.clone()),
			Value::Tree(_) => None,
		}
	}
}

impl fmt::Display for Value {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Value::Null => write!(f, "null"),
			Value::Bool(b) => write!(f, "{}", b),
			Value::Integer(i) => write!(f, "{}", i),
			Value::Float(x) => write!(f, "{}", x),
			Value::String(s) => write!(f, "{:?}", s),
			Value::Tree(tree) => {
				write!(f, "{{")?;
				for (i, (key, value)) in tree.iter().enumerate() {
					if i > 0 {
						write!(f, ", ")?;
					}
					write!(f, "{}: {}", key, value)?;
				}
				write!(f, "}}")
			}
		}
	}
}

impl From<bool> for Value {
	fn from(b: bool) -> Self {
		Value::Bool(b)
	}
}

impl From<i64> for Value {
	fn from(i: i64) -> Self {
		Value::Integer(i)
	}
}

impl From<i32> for Value {
	fn from(i: i32) -> Self {
		Value::Integer(i64::from(i))
	}
}

impl From<f64> for Value {
	fn from(f: f64) -> Self {
		Value::Float(f)
	}
}

impl From<&str> for Value {
	fn from(s: &str) -> Self {
		Value::String(s.to_string())
	}
}

impl From<String> for Value {
	fn from(s: String) -> Self {
		Value::String(s)
	}
}

impl From<Tree> for Value {
	fn from(tree: Tree) -> Self {
		Value::Tree(tree)
	}
}

impl<T: Into<Value>> From<Option<T>> for Value {
	fn from(value: Option<T>) -> Self {
		value.map_or(Value::Null, Into::into)
	}
}

impl Serialize for Value {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		match self {
			Value::Null => serializer.serialize_none(),
			Value::Bool(b) => serializer.serialize_bool(*b),
			Value::Integer(i) => serializer.serialize_i64(*i),
			Value::Float(f) => serializer.serialize_f64(*f),
			Value::String(s) => serializer.serialize_str(s),
			Value::Tree(tree) => tree.serialize(serializer),
		}
	}
}

/// An insertion-ordered mapping from keys to [`Value`]s.
///
/// Option trees are small and read far more often than written, so entries
/// live in a flat vector and lookups scan it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Tree {
	entries: Vec<(String, Value)>,
}

impl Tree {
	pub fn new() -> Self {
		Self::default()
	}

	/// A tree holding exactly one entry.
	pub fn single(key: impl Into<String>, value: impl Into<Value>) -> Self {
		Tree {
			entries: vec![(key.into(), value.into())],
		}
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn get(&self, key: &str) -> Option<&Value> {
		self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
	}

	pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
		self.entries
			.iter_mut()
			.find(|(k, _)| k == key)
			.map(|(_, v)| v)
	}

	pub fn contains_key(&self, key: &str) -> bool {
		self.get(key).is_some()
	}

	/// Insert or replace. A replaced key keeps its position; returns the old value.
	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
		let key = key.into();
		let value = value.into();
		match self.get_mut(&key) {
			Some(slot) => Some(std::mem::replace(slot, value)),
			None => {
				self.entries.push((key, value));
				None
			}
		}
	}

	pub fn remove(&mut self, key: &str) -> Option<Value> {
		let idx = self.entries.iter().position(|(k, _)| k == key)?;
		Some(self.entries.remove(idx).1)
	}

	/// The first entry in insertion order.
	pub fn first(&self) -> Option<(&str, &Value)> {
		self.entries.first().map(|(k, v)| (k.as_str(), v))
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
		self.entries.iter().map(|(k, v)| (k.as_str(), v))
	}

	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.entries.iter().map(|(k, _)| k.as_str())
	}

	pub fn retain(&mut self, mut keep: impl FnMut(&str, &mut Value) -> bool) {
		self.entries.retain_mut(|(k, v)| keep(k, v));
	}
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Tree {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut tree = Tree::new();
		for (key, value) in iter {
			tree.insert(key, value);
		}
		tree
	}
}

impl IntoIterator for Tree {
	type Item = (String, Value);
	type IntoIter = std::vec::IntoIter<(String, Value)>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.into_iter()
	}
}

impl Serialize for Tree {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		let mut map = serializer.serialize_map(Some(self.len()))?;
		// Scalars before subtrees: TOML wants plain keys ahead of tables.
		let (trees, scalars): (Vec<_>, Vec<_>) =
			self.iter().partition(|(_, value)| matches!(value, Value::Tree(_)));
		for (key, value) in scalars.into_iter().chain(trees) {
			map.serialize_entry(key, value)?;
		}
		map.end()
	}
}
