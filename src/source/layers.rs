use crate::error::Result;
use crate::source::parser::parse_source_file;
use crate::store::OptionStore;
use log::debug;
use std::path::PathBuf;

/// Build a store from option files applied in order.
///
/// Each file is merged over the previous ones, so later files win. An empty
/// list gives an empty store.
pub fn load_layered(paths: &[PathBuf]) -> Result<OptionStore> {
	let mut store = OptionStore::new();
	for path in paths {
		let data = parse_source_file(path)?;
		debug!("layering options from {}", path.display());
		store.update_options(data)?;
	}
	Ok(store)
}

/// Fill paths not yet set in `store` from default files.
///
/// Earlier default files take precedence over later ones.
pub fn apply_defaults(store: &mut OptionStore, paths: &[PathBuf]) -> Result<()> {
	for path in paths {
		let data = parse_source_file(path)?;
		debug!("applying defaults from {}", path.display());
		store.update_undefined_options(data)?;
	}
	Ok(())
}
