use crate::ruleset::types::{Configuration, OverrideSet, RuleEntry};
use tracing::{debug, trace};

/// Layer an override set on top of a base configuration.
///
/// The result holds every base rule, with override entries replacing base
/// rules of the same name wholesale and adding any the base lacks. All other
/// top-level keys are carried over as-is. The base is never modified and
/// nothing is validated: whatever the base holds passes through.
///
/// Composing the same overrides onto an already composed configuration
/// yields an equal configuration.
pub fn compose(base: &Configuration, overrides: &OverrideSet) -> Configuration {
	let mut composed = base.clone();

	for (name, definition) in overrides.rules() {
		let entry = RuleEntry::from(definition.clone());
		match composed.rules.insert(name.clone(), entry) {
			Some(previous) if previous.definition() == Some(definition) => {
				trace!(rule = %name, "override matches base rule");
			}
			Some(_) => debug!(rule = %name, "replaced base rule"),
			None => debug!(rule = %name, "added rule missing from base"),
		}
	}

	composed
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::ruleset::types::{
		Applicability, COMMIT_TYPES, RuleDefinition, Severity, TYPE_ENUM,
	};
	use serde_json::json;
	use std::collections::BTreeMap;

	fn base_with_feat() -> Configuration {
		serde_json::from_value(json!({
			"parserPreset": "conventional-changelog-conventionalcommits",
			"rules": {
				"type-enum": [2, "always", ["feat", "fix"]],
				"subject-case": [2, "never", ["upper-case"]]
			}
		}))
		.unwrap()
	}

	#[test]
	fn test_type_enum_is_replaced_not_appended() {
		let composed = compose(&base_with_feat(), &OverrideSet::commit_types());

		let expected: RuleDefinition =
			serde_json::from_value(json!([2, "always", COMMIT_TYPES])).unwrap();
		assert_eq!(composed.rules[TYPE_ENUM], RuleEntry::Typed(expected));
		assert!(
			!composed.rules[TYPE_ENUM]
				.allowed_values()
				.unwrap()
				.contains(&"feat")
		);
	}

	#[test]
	fn test_other_rules_pass_through() {
		let base = base_with_feat();
		let composed = compose(&base, &OverrideSet::commit_types());

		assert_eq!(composed.rules.len(), 2);
		assert_eq!(composed.rules["subject-case"], base.rules["subject-case"]);
		assert_eq!(
			serde_json::to_value(&composed.rules).unwrap(),
			json!({
				"type-enum": [2, "always", [
					"build", "chore", "ci", "docs", "feature", "fix",
					"performance", "refactor", "revert", "style", "test", "wip"
				]],
				"subject-case": [2, "never", ["upper-case"]]
			})
		);
	}

	#[test]
	fn test_top_level_keys_are_untouched() {
		let base = base_with_feat();
		let composed = compose(&base, &OverrideSet::commit_types());
		assert_eq!(composed.settings, base.settings);
	}

	#[test]
	fn test_base_is_not_mutated() {
		let base = base_with_feat();
		let snapshot = base.clone();

		let _ = compose(&base, &OverrideSet::commit_types());

		assert_eq!(base, snapshot);
		assert_eq!(
			base.rules[TYPE_ENUM].allowed_values(),
			Some(vec!["feat", "fix"])
		);
	}

	#[test]
	fn test_compose_is_idempotent() {
		let overrides = OverrideSet::commit_types();
		let once = compose(&base_with_feat(), &overrides);
		let twice = compose(&once, &overrides);
		assert_eq!(once, twice);
	}

	#[test]
	fn test_empty_base_gains_override() {
		let composed = compose(&Configuration::default(), &OverrideSet::commit_types());
		assert_eq!(composed.rules.len(), 1);
		assert!(composed.rules.contains_key(TYPE_ENUM));
		assert!(composed.settings.is_empty());
	}

	#[test]
	fn test_empty_override_set_is_identity() {
		let base = base_with_feat();
		let composed = compose(&base, &OverrideSet::default());
		assert_eq!(composed, base);
	}

	#[test]
	fn test_custom_override_set() {
		let mut rules = BTreeMap::new();
		rules.insert(
			"subject-case".to_string(),
			RuleDefinition::new(Severity::Off, Applicability::Never, None),
		);
		let composed = compose(&base_with_feat(), &OverrideSet::new(rules));

		assert_eq!(
			composed.rules["subject-case"].definition().map(|rule| rule.severity),
			Some(Severity::Off)
		);
		assert_eq!(
			composed.rules[TYPE_ENUM].allowed_values(),
			Some(vec!["feat", "fix"])
		);
	}

	#[test]
	fn test_unreadable_base_rules_pass_through() {
		let base: Configuration = serde_json::from_value(json!({
			"rules": {
				"type-enum": [2, "always", ["feat"]],
				"custom-rule": [3, "sometimes", 1, "extra"],
				"null-rule": [2, null, 5]
			}
		}))
		.unwrap();

		let composed = compose(&base, &OverrideSet::commit_types());

		assert_eq!(composed.rules["custom-rule"], base.rules["custom-rule"]);
		assert_eq!(composed.rules["null-rule"], base.rules["null-rule"]);
		assert_eq!(
			composed.rules[TYPE_ENUM].allowed_values(),
			Some(COMMIT_TYPES.to_vec())
		);
	}

	#[test]
	fn test_raw_type_enum_is_replaced() {
		let base: Configuration = serde_json::from_value(json!({
			"rules": { "type-enum": "feat|fix" }
		}))
		.unwrap();

		let composed = compose(&base, &OverrideSet::commit_types());
		assert_eq!(
			composed.rules[TYPE_ENUM].allowed_values(),
			Some(COMMIT_TYPES.to_vec())
		);
	}
}
