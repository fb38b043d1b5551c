//! Commitrc - CLI tool for composing commit-lint rulesets.
//!
//! This library provides the core functionality for commitrc, including:
//! - Project config parsing and discovery
//! - Base ruleset resolution (built-in presets or ruleset files)
//! - Layering override sets over a base configuration
//! - Exporting the result as commitlint-compatible JSON
//!
//! # Example
//!
//! ```no_run
//! use commitrc_cli::base::resolve_base;
//! use commitrc_cli::config::load_project_config;
//! use commitrc_cli::ruleset::{OverrideSet, check_type, compose};
//!
//! let cwd = std::env::current_dir().unwrap();
//! let project = load_project_config(&cwd).unwrap();
//! let base = resolve_base(&project.config.extends, &project.anchor).unwrap();
//! let config = compose(&base, &OverrideSet::commit_types());
//!
//! assert!(check_type(&config, "feature").passes());
//! ```

pub mod base;
pub mod config;
pub mod error;
pub mod export;
pub mod ruleset;

pub use error::{CommitrcError, Result};

use crate::config::LoadedProject;
use crate::ruleset::{Configuration, OverrideSet, compose};

/// Resolve the project's base ruleset and layer the shipped override set
/// on top of it.
pub fn composed_configuration(project: &LoadedProject) -> Result<Configuration> {
	let base = base::resolve_base(&project.config.extends, &project.anchor)?;
	Ok(compose(&base, &OverrideSet::commit_types()))
}
