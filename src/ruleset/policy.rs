use crate::ruleset::types::{Applicability, Configuration, Severity, TYPE_ENUM};

/// Outcome of checking a commit type label against a configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeVerdict {
	/// The `type-enum` rule admits the label.
	Allowed,

	/// The `type-enum` rule rejects the label at the given severity.
	Rejected { severity: Severity },

	/// No active `type-enum` rule, so any label is accepted.
	Unrestricted,
}

impl TypeVerdict {
	/// True unless the label is rejected at error severity.
	pub fn passes(&self) -> bool {
		!matches!(
			self,
			TypeVerdict::Rejected {
				severity: Severity::Error
			}
		)
	}
}

/// Check whether `commit_type` is admitted by the configuration's
/// `type-enum` rule.
///
/// A rule whose parameter is not a list of strings is treated as an empty
/// list. A `type-enum` entry that does not read as a rule definition is
/// left for the linter to judge and restricts nothing here.
pub fn check_type(config: &Configuration, commit_type: &str) -> TypeVerdict {
	let Some(rule) = config.rules.get(TYPE_ENUM).and_then(|entry| entry.definition()) else {
		return TypeVerdict::Unrestricted;
	};

	if rule.severity == Severity::Off {
		return TypeVerdict::Unrestricted;
	}

	let listed = rule
		.allowed_values()
		.is_some_and(|values| values.contains(&commit_type));

	let admitted = match rule.applicability.unwrap_or(Applicability::Always) {
		Applicability::Always => listed,
		Applicability::Never => !listed,
	};

	if admitted {
		TypeVerdict::Allowed
	} else {
		TypeVerdict::Rejected {
			severity: rule.severity,
		}
	}
}

/// The labels listed by the `type-enum` rule, in order.
pub fn allowed_types(config: &Configuration) -> Vec<&str> {
	config
		.rules
		.get(TYPE_ENUM)
		.and_then(|entry| entry.allowed_values())
		.unwrap_or_default()
}
