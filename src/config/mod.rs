//! Project configuration for commitrc.
//!
//! This module handles:
//! - `.commitrc.toml` parsing and validation
//! - Directory walk-up discovery with a user-level fallback

pub mod discovery;
pub mod parser;
pub mod types;

pub use discovery::{SKIP_USER_CONFIG_ENV, discover_config, load_project_config, user_config_path};
pub use parser::{parse_config_file, parse_config_str};
pub use types::{CONFIG_FILE_NAME, LoadedProject, ProjectConfig};
