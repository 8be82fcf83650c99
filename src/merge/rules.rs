use crate::error::{JsLintError, Result};
use crate::merge::MergeOutcome;
use crate::merge::ignore::write_file;
use serde::Serialize;
use serde_json::Value;
use serde_json::ser::PrettyFormatter;
use std::path::Path;

/// A JSON object, key order preserved.
pub type RuleMap = serde_json::Map<String, Value>;

/// Top-level sections copied from the template, key by key.
pub const MERGED_SECTIONS: [&str; 2] = ["globals", "rules"];

/// Parse the rule template. Anything other than a JSON object is fatal.
pub fn parse_rule_template(text: &str, name: &str) -> Result<RuleMap> {
	let value: Value = serde_json::from_str(text).map_err(|source| JsLintError::TemplateParse {
		name: name.to_string(),
		source,
	})?;

	match value {
		Value::Object(map) => Ok(map),
		_ => Err(JsLintError::TemplateNotObject {
			name: name.to_string(),
		}),
	}
}

/// Parse an existing project rule document.
///
/// An empty JSON array counts as an empty document. Returns the reason as
/// `Err` when the text is anything else but a JSON object, so the caller can
/// decide between recovering and failing.
pub fn parse_existing_document(text: &str) -> std::result::Result<RuleMap, String> {
	match serde_json::from_str::<Value>(text) {
		Ok(Value::Object(map)) => Ok(map),
		Ok(Value::Array(items)) if items.is_empty() => Ok(RuleMap::new()),
		Ok(other) => Err(format!("expected a JSON object, found {}", json_kind(&other))),
		Err(e) => Err(e.to_string()),
	}
}

/// Overwrite `existing.globals` and `existing.rules` entries with the template's.
///
/// Keys only present in `existing` are left alone, as is every other top-level key.
pub fn merge_rule_document(template: &RuleMap, existing: Option<RuleMap>) -> RuleMap {
	let mut merged = existing.unwrap_or_default();

	for section in MERGED_SECTIONS {
		let Some(Value::Object(template_section)) = template.get(section) else {
			continue;
		};

		let target = merged
			.entry(section)
			.or_insert_with(|| Value::Object(RuleMap::new()));
		if !target.is_object() {
			*target = Value::Object(RuleMap::new());
		}

		if let Value::Object(target) = target {
			for (key, value) in template_section {
				target.insert(key.clone(), value.clone());
			}
		}
	}

	merged
}

/// Pretty-print with four-space indentation and a trailing newline.
pub fn render_rule_document(doc: &RuleMap) -> serde_json::Result<String> {
	let mut buf = Vec::new();
	let mut serializer =
		serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
	doc.serialize(&mut serializer)?;

	let mut content = String::from_utf8_lossy(&buf).into_owned();
	content.push('\n');
	Ok(content)
}

/// Merge `template` into the rule document at `path`, rewriting it in full.
///
/// A malformed existing document is rebuilt from a blank base unless `strict`,
/// in which case it is an error and the file is left untouched.
pub fn merge_rule_file(path: &Path, template: &RuleMap, strict: bool) -> Result<MergeOutcome> {
	let (existing, outcome) = if path.exists() {
		let content = std::fs::read_to_string(path).map_err(|source| JsLintError::FileRead {
			path: path.to_path_buf(),
			source,
		})?;

		match parse_existing_document(&content) {
			Ok(doc) => (Some(doc), MergeOutcome::Merged),
			Err(reason) if strict => {
				return Err(JsLintError::MalformedRuleDocument {
					path: path.to_path_buf(),
					reason,
				});
			}
			Err(reason) => {
				tracing::warn!(
					path = %path.display(),
					%reason,
					"existing rule document is malformed, starting from an empty document"
				);
				(None, MergeOutcome::Recovered { reason })
			}
		}
	} else {
		(None, MergeOutcome::Created)
	};

	let merged = merge_rule_document(template, existing);
	let content =
		render_rule_document(&merged).map_err(|source| JsLintError::RenderRuleDocument {
			path: path.to_path_buf(),
			source,
		})?;

	tracing::info!(path = %path.display(), "merging rule document");
	write_file(path, &content)?;
	Ok(outcome)
}

fn json_kind(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "a boolean",
		Value::Number(_) => "a number",
		Value::String(_) => "a string",
		Value::Array(_) => "an array",
		Value::Object(_) => "an object",
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;
	use std::fs;

	fn map(value: Value) -> RuleMap {
		match value {
			Value::Object(map) => map,
			_ => panic!("expected object"),
		}
	}

	#[test]
	fn test_template_overwrites_and_adds() {
		let template = map(json!({"rules": {"a": 2, "b": 3}}));
		let existing = map(json!({"rules": {"a": 1}}));

		let merged = merge_rule_document(&template, Some(existing));

		assert_eq!(Value::Object(merged), json!({"rules": {"a": 2, "b": 3}}));
	}

	#[test]
	fn test_project_only_keys_survive() {
		let template = map(json!({"globals": {"Drupal": true}, "rules": {"semi": "error"}}));
		let existing = map(json!({
			"extends": "drupal",
			"globals": {"myGlobal": false},
			"rules": {"custom-rule": ["warn"]}
		}));

		let merged = merge_rule_document(&template, Some(existing));

		assert_eq!(
			Value::Object(merged),
			json!({
				"extends": "drupal",
				"globals": {"myGlobal": false, "Drupal": true},
				"rules": {"custom-rule": ["warn"], "semi": "error"}
			})
		);
	}

	#[test]
	fn test_absent_existing_gets_only_merged_sections() {
		let template = map(json!({"root": true, "globals": {"jQuery": true}}));

		let merged = merge_rule_document(&template, None);

		assert_eq!(Value::Object(merged), json!({"globals": {"jQuery": true}}));
	}

	#[test]
	fn test_non_object_section_is_replaced() {
		let template = map(json!({"rules": {"a": 1}}));
		let existing = map(json!({"rules": ["bogus"]}));

		let merged = merge_rule_document(&template, Some(existing));

		assert_eq!(Value::Object(merged), json!({"rules": {"a": 1}}));
	}

	#[test]
	fn test_merge_twice_is_stable() {
		let template = map(json!({"globals": {"Drupal": true}, "rules": {"a": [1, 2]}}));
		let existing = map(json!({"rules": {"z": 0}}));

		let once = merge_rule_document(&template, Some(existing));
		let twice = merge_rule_document(&template, Some(once.clone()));

		assert_eq!(
			render_rule_document(&once).unwrap(),
			render_rule_document(&twice).unwrap()
		);
	}

	#[test]
	fn test_parse_existing_document_rejects_non_objects() {
		assert!(parse_existing_document("{\"rules\": {}}").is_ok());
		assert!(
			parse_existing_document("[1, 2]")
				.unwrap_err()
				.contains("an array")
		);
		assert!(parse_existing_document("{not json").is_err());
	}

	#[test]
	fn test_empty_array_is_an_empty_document() {
		assert_eq!(parse_existing_document("[]").unwrap(), RuleMap::new());
		assert_eq!(parse_existing_document(" [ ]\n").unwrap(), RuleMap::new());
	}

	#[test]
	fn test_merge_rule_file_empty_array_merges_silently() {
		let temp_dir = tempfile::tempdir().unwrap();
		let path = temp_dir.path().join(".eslintrc.json");
		fs::write(&path, "[]").unwrap();
		let template = map(json!({"rules": {"a": 1}}));

		let outcome = merge_rule_file(&path, &template, true).unwrap();

		assert_eq!(outcome, MergeOutcome::Merged);
		let written: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
		assert_eq!(written, json!({"rules": {"a": 1}}));
	}

	#[test]
	fn test_parse_rule_template_errors() {
		assert!(matches!(
			parse_rule_template("{", "tpl").unwrap_err(),
			JsLintError::TemplateParse { .. }
		));
		assert!(matches!(
			parse_rule_template("true", "tpl").unwrap_err(),
			JsLintError::TemplateNotObject { .. }
		));
	}

	#[test]
	fn test_render_uses_four_spaces_and_unescaped_slashes() {
		let doc = map(json!({"rules": {"path": "a/b"}}));

		let rendered = render_rule_document(&doc).unwrap();

		assert_eq!(
			rendered,
			"{\n    \"rules\": {\n        \"path\": \"a/b\"\n    }\n}\n"
		);
	}

	#[test]
	fn test_merge_rule_file_recovers_from_malformed() {
		let temp_dir = tempfile::tempdir().unwrap();
		let path = temp_dir.path().join(".eslintrc.json");
		fs::write(&path, "{ this is not json").unwrap();
		let template = map(json!({"rules": {"a": 1}}));

		let outcome = merge_rule_file(&path, &template, false).unwrap();

		assert!(matches!(outcome, MergeOutcome::Recovered { .. }));
		let written: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
		assert_eq!(written, json!({"rules": {"a": 1}}));
	}

	#[test]
	fn test_merge_rule_file_strict_leaves_file_alone() {
		let temp_dir = tempfile::tempdir().unwrap();
		let path = temp_dir.path().join(".eslintrc.json");
		fs::write(&path, "{ this is not json").unwrap();
		let template = map(json!({"rules": {"a": 1}}));

		let result = merge_rule_file(&path, &template, true);

		assert!(matches!(
			result.unwrap_err(),
			JsLintError::MalformedRuleDocument { .. }
		));
		assert_eq!(fs::read_to_string(&path).unwrap(), "{ this is not json");
	}

	#[test]
	fn test_merge_rule_file_creates_missing_docroot() {
		let temp_dir = tempfile::tempdir().unwrap();
		let path = temp_dir.path().join("web/.eslintrc.json");
		let template = map(json!({"globals": {"Drupal": true}}));

		let outcome = merge_rule_file(&path, &template, false).unwrap();

		assert_eq!(outcome, MergeOutcome::Created);
		assert!(fs::read_to_string(&path).unwrap().ends_with("}\n"));
	}
}
