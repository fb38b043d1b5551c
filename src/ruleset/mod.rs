//! Rule model and composition for commitrc.
//!
//! This module handles:
//! - Rule definitions and whole configurations
//! - Layering override sets over a base configuration
//! - Querying the effective commit type policy

pub mod compose;
pub mod policy;
pub mod types;

pub use compose::compose;
pub use policy::{TypeVerdict, allowed_types, check_type};
pub use types::{
	Applicability, COMMIT_TYPES, Configuration, OverrideSet, RuleDefinition, RuleEntry, Severity,
	TYPE_ENUM,
};
