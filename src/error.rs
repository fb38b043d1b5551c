use std::path::PathBuf;

/// Library-level structured errors for commitrc.
///
/// Use `thiserror` for structured errors that library consumers can match on.
/// The CLI binary wraps these with `anyhow` for rich context chains.
#[derive(Debug, thiserror::Error)]
pub enum CommitrcError {
	#[error("Failed to read config file: {path}")]
	ConfigReadError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse config file: {path}")]
	ConfigParseError {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	#[error("Invalid value for `{key}` in {path}: {reason}")]
	InvalidConfig {
		path: PathBuf,
		key: &'static str,
		reason: String,
	},

	#[error("Base ruleset not found: {path}")]
	BaseNotFound { path: PathBuf },

	#[error("Failed to read base ruleset: {path}")]
	BaseReadError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse base ruleset: {path}: {reason}")]
	BaseParseError { path: PathBuf, reason: String },

	#[error("Unsupported base ruleset format (expected .json or .toml): {path}")]
	UnsupportedBaseFormat { path: PathBuf },

	#[error("Failed to serialize configuration")]
	ExportSerializeError {
		#[source]
		source: serde_json::Error,
	},

	#[error("Failed to write exported configuration: {path}")]
	ExportWriteError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to resolve home directory")]
	HomeDirectoryNotFound,
}

/// Result type alias using CommitrcError.
pub type Result<T> = std::result::Result<T, CommitrcError>;
