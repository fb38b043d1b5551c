use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Name of the rule that restricts commit type labels.
pub const TYPE_ENUM: &str = "type-enum";

/// Commit types admitted by the shipped override set, in order.
pub const COMMIT_TYPES: [&str; 12] = [
	"build",
	"chore",
	"ci",
	"docs",
	"feature",
	"fix",
	"performance",
	"refactor",
	"revert",
	"style",
	"test",
	"wip",
];

/// How strongly a rule violation is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
	Off = 0,
	Warn = 1,
	Error = 2,
}

impl Severity {
	/// Get the lowercase name used in messages.
	pub fn as_str(&self) -> &'static str {
		match self {
			Severity::Off => "off",
			Severity::Warn => "warn",
			Severity::Error => "error",
		}
	}
}

impl TryFrom<u8> for Severity {
	type Error = String;

	fn try_from(level: u8) -> Result<Self, String> {
		match level {
			0 => Ok(Severity::Off),
			1 => Ok(Severity::Warn),
			2 => Ok(Severity::Error),
			other => Err(format!("severity must be 0, 1 or 2, found {other}")),
		}
	}
}

impl From<Severity> for u8 {
	fn from(severity: Severity) -> Self {
		severity as u8
	}
}

impl fmt::Display for Severity {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Whether a rule's condition must hold or must not hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applicability {
	Always,
	Never,
}

impl Applicability {
	pub fn as_str(&self) -> &'static str {
		match self {
			Applicability::Always => "always",
			Applicability::Never => "never",
		}
	}

	fn parse(input: &str) -> Option<Self> {
		match input {
			"always" => Some(Applicability::Always),
			"never" => Some(Applicability::Never),
			_ => None,
		}
	}
}

impl fmt::Display for Applicability {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// A single lint rule: severity, applicability and an optional parameter.
///
/// On the wire this is a sequence of one to three elements, e.g.
/// `[2, "always", ["fix", "docs"]]` or `[1, "always"]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Value>", into = "Vec<Value>")]
pub struct RuleDefinition {
	pub severity: Severity,
	pub applicability: Option<Applicability>,
	pub value: Option<Value>,
}

impl RuleDefinition {
	pub fn new(severity: Severity, applicability: Applicability, value: Option<Value>) -> Self {
		RuleDefinition {
			severity,
			applicability: Some(applicability),
			value,
		}
	}

	/// The rule parameter as a list of strings, if it is one.
	pub fn allowed_values(&self) -> Option<Vec<&str>> {
		match self.value {
			Some(Value::Array(ref items)) => items.iter().map(Value::as_str).collect(),
			_ => None,
		}
	}
}

impl TryFrom<Vec<Value>> for RuleDefinition {
	type Error = String;

	fn try_from(items: Vec<Value>) -> Result<Self, String> {
		if items.is_empty() || items.len() > 3 {
			return Err(format!(
				"rule definition must have 1 to 3 elements, found {}",
				items.len()
			));
		}

		let mut items = items.into_iter();

		let severity = match items.next() {
			Some(Value::Number(level)) => level
				.as_u64()
				.and_then(|level| u8::try_from(level).ok())
				.ok_or_else(|| format!("severity must be 0, 1 or 2, found {level}"))
				.and_then(Severity::try_from)?,
			other => return Err(format!("severity must be an integer, found {other:?}")),
		};

		let applicability = match items.next() {
			None => None,
			Some(Value::String(ref word)) => Some(
				Applicability::parse(word)
					.ok_or_else(|| format!("applicability must be \"always\" or \"never\", found {word:?}"))?,
			),
			Some(other) => return Err(format!("applicability must be a string, found {other}")),
		};

		Ok(RuleDefinition {
			severity,
			applicability,
			value: items.next(),
		})
	}
}

impl From<RuleDefinition> for Vec<Value> {
	fn from(definition: RuleDefinition) -> Self {
		let mut items = vec![Value::from(u8::from(definition.severity))];

		match (definition.applicability, definition.value) {
			(Some(applicability), Some(value)) => {
				items.push(Value::from(applicability.as_str()));
				items.push(value);
			}
			(Some(applicability), None) => items.push(Value::from(applicability.as_str())),
			// A parameter needs a position; "always" is what the linter assumes when omitted.
			(None, Some(value)) => {
				items.push(Value::from(Applicability::Always.as_str()));
				items.push(value);
			}
			(None, None) => {}
		}

		items
	}
}

/// One entry of a configuration's `rules` mapping.
///
/// Entries that read as a [`RuleDefinition`] are typed; anything else is
/// kept verbatim and left for the linter to judge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleEntry {
	Typed(RuleDefinition),
	Raw(Value),
}

impl RuleEntry {
	pub fn definition(&self) -> Option<&RuleDefinition> {
		match self {
			RuleEntry::Typed(definition) => Some(definition),
			RuleEntry::Raw(_) => None,
		}
	}

	/// The rule parameter as a list of strings, if the entry is typed and
	/// its parameter is one.
	pub fn allowed_values(&self) -> Option<Vec<&str>> {
		self.definition().and_then(RuleDefinition::allowed_values)
	}
}

impl From<RuleDefinition> for RuleEntry {
	fn from(definition: RuleDefinition) -> Self {
		RuleEntry::Typed(definition)
	}
}

/// A complete lint configuration: the `rules` mapping plus every other
/// top-level key, carried through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
	/// `null` reads as an empty mapping.
	#[serde(default, deserialize_with = "null_as_empty")]
	pub rules: BTreeMap<String, RuleEntry>,

	/// All other top-level keys (`parserPreset`, `prompt`, ...).
	#[serde(flatten)]
	pub settings: BTreeMap<String, Value>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<BTreeMap<String, RuleEntry>, D::Error>
where
	D: serde::Deserializer<'de>,
{
	Option::<BTreeMap<String, RuleEntry>>::deserialize(deserializer)
		.map(Option::unwrap_or_default)
}

/// Rules layered over a base configuration. Entries replace base rules of
/// the same name wholesale.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverrideSet {
	rules: BTreeMap<String, RuleDefinition>,
}

impl OverrideSet {
	pub fn new(rules: BTreeMap<String, RuleDefinition>) -> Self {
		OverrideSet { rules }
	}

	/// The shipped override set: a single `type-enum` rule at error severity
	/// admitting exactly [`COMMIT_TYPES`].
	pub fn commit_types() -> Self {
		let allowed = COMMIT_TYPES.iter().map(|t| Value::from(*t)).collect();
		let mut rules = BTreeMap::new();
		rules.insert(
			TYPE_ENUM.to_string(),
			RuleDefinition::new(
				Severity::Error,
				Applicability::Always,
				Some(Value::Array(allowed)),
			),
		);
		OverrideSet { rules }
	}

	pub fn rules(&self) -> &BTreeMap<String, RuleDefinition> {
		&self.rules
	}
}
