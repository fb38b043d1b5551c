use crate::config::parser::parse_config_file;
use crate::config::types::{CONFIG_FILE_NAME, LoadedProject};
use crate::error::{CommitrcError, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable that, if truthy, skips the ~/.commitrc.toml fallback.
pub const SKIP_USER_CONFIG_ENV: &str = "COMMITRC_SKIP_USER_CONFIG";

/// Find the project config that applies to `start_dir`.
///
/// The lookup order is:
/// 1. `.commitrc.toml` in `start_dir`, then in each parent directory
/// 2. ~/.commitrc.toml (unless `COMMITRC_SKIP_USER_CONFIG` is truthy)
///
/// The first file found wins. Returns `None` when there is no config at all.
pub fn discover_config(start_dir: &Path) -> Result<Option<LoadedProject>> {
	let mut current_dir = Some(start_dir);

	while let Some(dir) = current_dir {
		let config_path = dir.join(CONFIG_FILE_NAME);

		if config_path.is_file() {
			debug!(path = %config_path.display(), "found project config");
			return load_project(config_path).map(Some);
		}

		current_dir = dir.parent();
	}

	load_user_config()
}

/// Discover the project config for `start_dir`, falling back to defaults
/// anchored at `start_dir`.
pub fn load_project_config(start_dir: &Path) -> Result<LoadedProject> {
	match discover_config(start_dir)? {
		Some(loaded) => Ok(loaded),
		None => {
			debug!(dir = %start_dir.display(), "no project config, using defaults");
			Ok(LoadedProject::defaults(start_dir))
		}
	}
}

/// Load the user's ~/.commitrc.toml if it exists and isn't disabled.
fn load_user_config() -> Result<Option<LoadedProject>> {
	if is_env_truthy(SKIP_USER_CONFIG_ENV) {
		return Ok(None);
	}

	let user_config_path = user_config_path()?;

	if user_config_path.is_file() {
		debug!(path = %user_config_path.display(), "using user config");
		load_project(user_config_path).map(Some)
	} else {
		Ok(None)
	}
}

fn load_project(path: PathBuf) -> Result<LoadedProject> {
	let config = parse_config_file(&path)?;
	let anchor = path
		.parent()
		.map(Path::to_path_buf)
		.unwrap_or_else(|| PathBuf::from("."));

	Ok(LoadedProject {
		config,
		path: Some(path),
		anchor,
	})
}

/// Check if an environment variable is set to a truthy value.
fn is_env_truthy(var_name: &str) -> bool {
	match std::env::var(var_name) {
		Ok(value) => {
			let lower = value.to_lowercase();
			!value.is_empty() && lower != "0" && lower != "false" && lower != "no"
		}
		Err(_) => false,
	}
}

/// Get the path to the user's config file.
pub fn user_config_path() -> Result<PathBuf> {
	let home_dir = dirs::home_dir().ok_or(CommitrcError::HomeDirectoryNotFound)?;
	Ok(home_dir.join(CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::fs;

	#[test]
	fn test_is_env_truthy() {
		// SAFETY: Only this test touches these TEST_COMMITRC_ENV_* names; other tests in
		// the process (e.g. test_user_config_path) read HOME but never write env vars.
		unsafe {
			// Not set
			std::env::remove_var("TEST_COMMITRC_ENV_1");
			assert!(!is_env_truthy("TEST_COMMITRC_ENV_1"));

			// Empty string
			std::env::set_var("TEST_COMMITRC_ENV_2", "");
			assert!(!is_env_truthy("TEST_COMMITRC_ENV_2"));

			// "0"
			std::env::set_var("TEST_COMMITRC_ENV_3", "0");
			assert!(!is_env_truthy("TEST_COMMITRC_ENV_3"));

			// "FALSE"
			std::env::set_var("TEST_COMMITRC_ENV_4", "FALSE");
			assert!(!is_env_truthy("TEST_COMMITRC_ENV_4"));

			// "no"
			std::env::set_var("TEST_COMMITRC_ENV_5", "no");
			assert!(!is_env_truthy("TEST_COMMITRC_ENV_5"));

			// "1" - truthy
			std::env::set_var("TEST_COMMITRC_ENV_6", "1");
			assert!(is_env_truthy("TEST_COMMITRC_ENV_6"));

			// Any other value - truthy
			std::env::set_var("TEST_COMMITRC_ENV_7", "yes");
			assert!(is_env_truthy("TEST_COMMITRC_ENV_7"));

			for i in 1..=7 {
				std::env::remove_var(format!("TEST_COMMITRC_ENV_{}", i));
			}
		}
	}

	#[test]
	fn test_user_config_path() {
		let path = user_config_path().unwrap();
		assert!(path.ends_with(".commitrc.toml"));
	}

	#[test]
	fn test_nearest_config_wins() {
		let temp_dir = tempfile::tempdir().unwrap();
		let nested = temp_dir.path().join("a").join("b");
		fs::create_dir_all(&nested).unwrap();

		fs::write(
			temp_dir.path().join(CONFIG_FILE_NAME),
			"extends = \"outer.json\"\n",
		)
		.unwrap();
		fs::write(
			temp_dir.path().join("a").join(CONFIG_FILE_NAME),
			"extends = \"inner.json\"\n",
		)
		.unwrap();

		let loaded = discover_config(&nested).unwrap().unwrap();
		assert_eq!(loaded.config.extends, "inner.json");
		assert_eq!(loaded.anchor, temp_dir.path().join("a"));
		assert_eq!(
			loaded.path,
			Some(temp_dir.path().join("a").join(CONFIG_FILE_NAME))
		);
	}

	#[test]
	fn test_output_path_is_anchored() {
		let temp_dir = tempfile::tempdir().unwrap();
		fs::write(
			temp_dir.path().join(CONFIG_FILE_NAME),
			"output = \"lint/commitlint.json\"\n",
		)
		.unwrap();

		let loaded = load_project_config(temp_dir.path()).unwrap();
		assert_eq!(
			loaded.output_path(),
			temp_dir.path().join("lint").join("commitlint.json")
		);
	}

	#[test]
	fn test_invalid_config_propagates() {
		let temp_dir = tempfile::tempdir().unwrap();
		fs::write(temp_dir.path().join(CONFIG_FILE_NAME), "invalid toml [[[").unwrap();

		let result = discover_config(temp_dir.path());
		assert!(matches!(
			result,
			Err(CommitrcError::ConfigParseError { .. })
		));
	}
}
