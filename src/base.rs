//! Base ruleset resolution.
//!
//! A project extends either the built-in conventional-commits preset or a
//! ruleset file (`.json` or `.toml`) holding a full configuration.

use crate::error::{CommitrcError, Result};
use crate::ruleset::{Applicability, Configuration, RuleDefinition, Severity};
use serde_json::{Value, json};
use std::path::Path;
use tracing::debug;

/// Names accepted for the built-in conventional-commits preset.
pub const CONVENTIONAL_PRESET_NAMES: [&str; 2] = ["conventional", "@commitlint/config-conventional"];

/// The conventional-commits ruleset.
///
/// Carries the preset's `parserPreset`, its rules, and a `prompt` holding the
/// question texts for the commit header fields. The per-type descriptions of
/// the upstream prompt are not reproduced.
pub fn conventional() -> Configuration {
	let mut config = Configuration::default();

	config.settings.insert(
		"parserPreset".to_string(),
		Value::from("conventional-changelog-conventionalcommits"),
	);
	config.settings.insert(
		"prompt".to_string(),
		json!({
			"questions": {
				"type": {
					"description": "Select the type of change that you're committing"
				},
				"scope": {
					"description": "What is the scope of this change (e.g. component or file name)"
				},
				"subject": {
					"description": "Write a short, imperative tense description of the change"
				},
				"body": {
					"description": "Provide a longer description of the change"
				},
				"isBreaking": {
					"description": "Are there any breaking changes?"
				},
				"isIssueAffected": {
					"description": "Does this change affect any open issues?"
				}
			}
		}),
	);

	let rules = [
		("body-leading-blank", Severity::Warn, Applicability::Always, None),
		("body-max-line-length", Severity::Error, Applicability::Always, Some(json!(100))),
		("footer-leading-blank", Severity::Warn, Applicability::Always, None),
		("footer-max-line-length", Severity::Error, Applicability::Always, Some(json!(100))),
		("header-max-length", Severity::Error, Applicability::Always, Some(json!(100))),
		("header-trim", Severity::Error, Applicability::Always, None),
		(
			"subject-case",
			Severity::Error,
			Applicability::Never,
			Some(json!(["sentence-case", "start-case", "pascal-case", "upper-case"])),
		),
		("subject-empty", Severity::Error, Applicability::Never, None),
		("subject-full-stop", Severity::Error, Applicability::Never, Some(json!("."))),
		("type-case", Severity::Error, Applicability::Always, Some(json!("lower-case"))),
		("type-empty", Severity::Error, Applicability::Never, None),
		(
			"type-enum",
			Severity::Error,
			Applicability::Always,
			Some(json!([
				"build", "chore", "ci", "docs", "feat", "fix", "perf", "refactor", "revert",
				"style", "test"
			])),
		),
	];

	for (name, severity, applicability, value) in rules {
		config.rules.insert(
			name.to_string(),
			RuleDefinition::new(severity, applicability, value).into(),
		);
	}

	config
}

/// Resolve an `extends` value to a base configuration.
///
/// Preset names map to built-in rulesets; anything else is a path to a
/// ruleset file, relative to `anchor`.
pub fn resolve_base(extends: &str, anchor: &Path) -> Result<Configuration> {
	if CONVENTIONAL_PRESET_NAMES.contains(&extends) {
		debug!(preset = extends, "using built-in base ruleset");
		return Ok(conventional());
	}

	let path = anchor.join(extends);
	debug!(path = %path.display(), "loading base ruleset");

	if !path.is_file() {
		return Err(CommitrcError::BaseNotFound { path });
	}

	let content = std::fs::read_to_string(&path).map_err(|source| CommitrcError::BaseReadError {
		path: path.clone(),
		source,
	})?;

	let extension = path
		.extension()
		.and_then(|ext| ext.to_str())
		.map(str::to_ascii_lowercase);
	let parsed: std::result::Result<Configuration, String> = match extension.as_deref() {
		Some("json") => serde_json::from_str(&content).map_err(|e| e.to_string()),
		Some("toml") => toml::from_str(&content).map_err(|e| e.to_string()),
		_ => return Err(CommitrcError::UnsupportedBaseFormat { path }),
	};

	parsed.map_err(|reason| CommitrcError::BaseParseError { path, reason })
}
