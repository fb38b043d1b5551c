use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Name of the project config file looked up by discovery.
pub const CONFIG_FILE_NAME: &str = ".commitrc.toml";

/// Preset used when a project config does not say what to extend.
pub const DEFAULT_EXTENDS: &str = "conventional";

/// File name the composed configuration is exported to by default.
pub const DEFAULT_OUTPUT: &str = ".commitlintrc.json";

/// Top-level configuration from a `.commitrc.toml` file.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ProjectConfig {
	/// Base ruleset to extend: a preset name or a path to a `.json`/`.toml`
	/// ruleset, relative to the config file.
	#[serde(default = "default_extends")]
	pub extends: String,

	/// Where the composed configuration is exported, relative to the config file.
	#[serde(default = "default_output")]
	pub output: PathBuf,
}

fn default_extends() -> String {
	DEFAULT_EXTENDS.to_string()
}

fn default_output() -> PathBuf {
	PathBuf::from(DEFAULT_OUTPUT)
}

impl Default for ProjectConfig {
	fn default() -> Self {
		ProjectConfig {
			extends: default_extends(),
			output: default_output(),
		}
	}
}

impl ProjectConfig {
	/// Validate that every key holds a usable value.
	pub fn validate(&self, path: &Path) -> Result<(), crate::error::CommitrcError> {
		if self.extends.trim().is_empty() {
			return Err(crate::error::CommitrcError::InvalidConfig {
				path: path.to_path_buf(),
				key: "extends",
				reason: "must name a preset or a ruleset file".to_string(),
			});
		}

		if self.output.as_os_str().is_empty() {
			return Err(crate::error::CommitrcError::InvalidConfig {
				path: path.to_path_buf(),
				key: "output",
				reason: "must not be empty".to_string(),
			});
		}

		Ok(())
	}
}

/// A project config together with where it came from.
#[derive(Debug, Clone)]
pub struct LoadedProject {
	/// The parsed configuration.
	pub config: ProjectConfig,

	/// The file it was loaded from, or `None` when defaults apply.
	pub path: Option<PathBuf>,

	/// Directory relative paths in the config resolve against.
	pub anchor: PathBuf,
}

impl LoadedProject {
	/// Defaults anchored at the given directory.
	pub fn defaults(anchor: &Path) -> Self {
		LoadedProject {
			config: ProjectConfig::default(),
			path: None,
			anchor: anchor.to_path_buf(),
		}
	}

	/// Absolute location of the export file.
	pub fn output_path(&self) -> PathBuf {
		self.anchor.join(&self.config.output)
	}
}
