//! Rendering composed configurations for the commit linter.

use crate::error::{CommitrcError, Result};
use crate::ruleset::Configuration;
use std::path::Path;
use tracing::info;

/// Render a configuration as pretty-printed JSON with a trailing newline.
///
/// Rule definitions are written as arrays (`[2, "always", [...]]`), the form
/// commitlint reads from `.commitlintrc.json`.
pub fn render_json(config: &Configuration) -> Result<String> {
	let mut rendered = serde_json::to_string_pretty(config)
		.map_err(|source| CommitrcError::ExportSerializeError { source })?;
	rendered.push('\n');
	Ok(rendered)
}

/// Write a configuration to `path`, replacing any previous export.
pub fn write_export(config: &Configuration, path: &Path) -> Result<()> {
	let rendered = render_json(config)?;

	if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
		std::fs::create_dir_all(parent).map_err(|source| CommitrcError::ExportWriteError {
			path: path.to_path_buf(),
			source,
		})?;
	}

	std::fs::write(path, rendered).map_err(|source| CommitrcError::ExportWriteError {
		path: path.to_path_buf(),
		source,
	})?;

	info!(path = %path.display(), rules = config.rules.len(), "exported configuration");
	Ok(())
}
