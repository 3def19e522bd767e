use crate::error::Result;
use crate::path::{find_paths, normalize, path_to_tree, resolve};
use crate::tree::{Tree, Value, flatten, merge_into, merge_only_undefined_into, prune_in_place};
use log::debug;

/// A nested option tree addressed by dot paths.
///
/// Every mutation leaves the tree free of `Null` entries and empty subtrees.
/// Writes with a malformed path fail with
/// [`OptionsError::InvalidPath`](crate::OptionsError::InvalidPath) and leave the
/// store untouched; reads treat a malformed path as missing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OptionStore {
	options: Tree,
}

impl OptionStore {
	/// An empty store.
	pub fn new() -> Self {
		Self::default()
	}

	/// A store populated from nested or dotted-flat data.
	pub fn with_options(data: Tree) -> Result<Self> {
		let mut store = Self::new();
		store.set_options(data)?;
		Ok(store)
	}

	/// Replace the whole tree with `data`.
	pub fn set_options(&mut self, data: Tree) -> Result<()> {
		let mut options = normalize(data)?;
		prune_in_place(&mut options);
		debug!("replaced options ({} top-level keys)", options.len());
		self.options = options;
		Ok(())
	}

	/// Deep-merge `data` into the tree, replacing values that already exist.
	pub fn update_options(&mut self, data: Tree) -> Result<()> {
		let data = normalize(data)?;
		merge_into(&mut self.options, data);
		prune_in_place(&mut self.options);
		Ok(())
	}

	/// Deep-merge `data` into the tree, only filling paths that are not set yet.
	pub fn update_undefined_options(&mut self, data: Tree) -> Result<()> {
		let data = normalize(data)?;
		merge_only_undefined_into(&mut self.options, data);
		prune_in_place(&mut self.options);
		Ok(())
	}

	/// The whole tree, borrowed. Clone it to keep a snapshot.
	pub fn options(&self) -> &Tree {
		&self.options
	}

	pub fn into_options(self) -> Tree {
		self.options
	}

	/// Merge `value` in at `key`; a tree value is combined with what is there.
	pub fn update_option(&mut self, key: &str, value: impl Into<Value>) -> Result<()> {
		let fragment = path_to_tree(key, value)?;
		debug!("update option {}", key);
		merge_into(&mut self.options, fragment);
		prune_in_place(&mut self.options);
		Ok(())
	}

	/// Replace whatever is at `key` with `value`.
	///
	/// Unlike [`update_option`](Self::update_option), existing children of
	/// `key` that `value` does not mention are dropped.
	pub fn set_option(&mut self, key: &str, value: impl Into<Value>) -> Result<()> {
		let fragment = path_to_tree(key, value)?;
		self.unset_option(key)?;
		debug!("set option {}", key);
		merge_into(&mut self.options, fragment);
		prune_in_place(&mut self.options);
		Ok(())
	}

	/// Remove `key` and any ancestors left empty by the removal.
	pub fn unset_option(&mut self, key: &str) -> Result<()> {
		let fragment = path_to_tree(key, Value::Null)?;
		debug!("unset option {}", key);
		merge_into(&mut self.options, fragment);
		prune_in_place(&mut self.options);
		Ok(())
	}

	/// The value at `key`, if any.
	pub fn get_option(&self, key: &str) -> Option<&Value> {
		resolve(&self.options, key)
	}

	/// The value at `key`, or `fallback` when nothing is stored there.
	pub fn get_option_or(&self, key: &str, fallback: impl Into<Value>) -> Value {
		match self.get_option(key) {
			Some(value) => value.clone(),
			None => fallback.into(),
		}
	}

	pub fn contains(&self, key: &str) -> bool {
		self.get_option(key).is_some()
	}

	/// The subset of the tree mentioning `needle`, or `None` when nothing does.
	pub fn find(&self, needle: &str) -> Option<Tree> {
		find_paths(needle, &self.options)
	}

	/// Every stored leaf with its full dot path.
	pub fn paths(&self) -> Vec<(String, Value)> {
		flatten(&self.options)
	}

	pub fn is_empty(&self) -> bool {
		self.options.is_empty()
	}
}
