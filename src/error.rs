use std::path::PathBuf;

/// Library-level structured errors for dotopts.
///
/// Use `thiserror` for structured errors that library consumers can match on.
/// The CLI binary wraps these with `anyhow` for rich context chains.
#[derive(Debug, thiserror::Error)]
pub enum OptionsError {
	#[error("Invalid option path: {path:?} (empty segment)")]
	InvalidPath { path: String },

	#[error("Failed to read options file: {path}")]
	SourceRead {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse options file: {path}")]
	SourceParse {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	#[error("Unsupported value at {key}: {kind}")]
	UnsupportedValue { key: String, kind: &'static str },

	#[error("Global option store has not been initialized")]
	NotInitialized,

	#[error("Global option store lock is poisoned")]
	Poisoned,
}

/// Result type alias using OptionsError.
pub type Result<T> = std::result::Result<T, OptionsError>;
