//! A process-wide default [`OptionStore`].
//!
//! Nothing is set up implicitly: call [`init`] before use and [`reset`] to
//! tear the store down again. Every accessor fails with
//! [`OptionsError::NotInitialized`] in between.

use crate::error::{OptionsError, Result};
use crate::store::options::OptionStore;
use crate::tree::{Tree, Value};
use log::{debug, warn};
use std::sync::{PoisonError, RwLock};

static GLOBAL: RwLock<Option<OptionStore>> = RwLock::new(None);

/// Install `store` as the process-wide store, replacing any previous one.
///
/// Recovers a lock poisoned by a panicking [`with_mut`] caller.
pub fn init(store: OptionStore) -> Result<()> {
	let mut guard = GLOBAL.write().unwrap_or_else(PoisonError::into_inner);
	GLOBAL.clear_poison();
	if guard.is_some() {
		warn!("re-initializing global option store");
	}
	*guard = Some(store);
	Ok(())
}

/// Drop the process-wide store, returning it if there was one.
///
/// Recovers a lock poisoned by a panicking [`with_mut`] caller.
pub fn reset() -> Result<Option<OptionStore>> {
	let mut guard = GLOBAL.write().unwrap_or_else(PoisonError::into_inner);
	GLOBAL.clear_poison();
	debug!("resetting global option store");
	Ok(guard.take())
}

pub fn is_initialized() -> bool {
	GLOBAL
		.read()
		.unwrap_or_else(PoisonError::into_inner)
		.is_some()
}

/// Run `f` against the process-wide store.
///
/// The lock is held while `f` runs: calling any other `global` function
/// from inside `f` deadlocks.
pub fn with<T>(f: impl FnOnce(&OptionStore) -> T) -> Result<T> {
	let guard = GLOBAL.read().map_err(|_| OptionsError::Poisoned)?;
	let store = guard.as_ref().ok_or(OptionsError::NotInitialized)?;
	Ok(f(store))
}

/// Run `f` against the process-wide store with write access.
///
/// The lock is held while `f` runs: calling any other `global` function
/// from inside `f` deadlocks. If `f` panics the lock stays poisoned and
/// accessors fail with [`OptionsError::Poisoned`] until [`init`] or
/// [`reset`] is called.
pub fn with_mut<T>(f: impl FnOnce(&mut OptionStore) -> Result<T>) -> Result<T> {
	let mut guard = GLOBAL.write().map_err(|_| OptionsError::Poisoned)?;
	let store = guard.as_mut().ok_or(OptionsError::NotInitialized)?;
	f(store)
}

pub fn set_options(data: Tree) -> Result<()> {
	with_mut(|store| store.set_options(data))
}

pub fn update_options(data: Tree) -> Result<()> {
	with_mut(|store| store.update_options(data))
}

pub fn update_undefined_options(data: Tree) -> Result<()> {
	with_mut(|store| store.update_undefined_options(data))
}

/// A copy of the whole tree.
pub fn options() -> Result<Tree> {
	with(|store| store.options().clone())
}

pub fn update_option(key: &str, value: impl Into<Value>) -> Result<()> {
	with_mut(|store| store.update_option(key, value))
}

pub fn set_option(key: &str, value: impl Into<Value>) -> Result<()> {
	with_mut(|store| store.set_option(key, value))
}

pub fn unset_option(key: &str) -> Result<()> {
	with_mut(|store| store.unset_option(key))
}

/// A copy of the value at `key`, if any.
pub fn get_option(key: &str) -> Result<Option<Value>> {
	with(|store| store.get_option(key).cloned())
}

pub fn get_option_or(key: &str, fallback: impl Into<Value>) -> Result<Value> {
	with(|store| store.get_option_or(key, fallback))
}
