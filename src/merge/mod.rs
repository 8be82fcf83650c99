//! Merging bundled templates into project lint configuration.
//!
//! This module handles:
//! - The `.eslintignore` pattern list (project entries win, template lines appended)
//! - The `.eslintrc.json` rule document (template `globals`/`rules` keys win)
//! - Loading the bundled or overridden templates
//!
//! The merge functions work on in-memory values; `merge_*_file` wrappers do the I/O.

pub mod ignore;
pub mod rules;
pub mod templates;

pub use ignore::{merge_ignore_file, merge_ignore_list, render_ignore_list, split_lines};
pub use rules::{
	RuleMap, merge_rule_document, merge_rule_file, parse_existing_document, parse_rule_template,
	render_rule_document,
};
pub use templates::TemplateSource;

/// What a file merge did to its target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeOutcome {
	/// The target did not exist and was written from the template.
	Created,

	/// The target existed and the template was merged into it.
	Merged,

	/// The target existed but could not be parsed; it was rebuilt from a blank base.
	Recovered { reason: String },
}

impl MergeOutcome {
	/// Operator-facing description for the given file name.
	pub fn describe(&self, file_name: &str) -> String {
		match self {
			MergeOutcome::Created => {
				format!("{file_name} does not exist, copied from template.")
			}
			MergeOutcome::Merged => format!("{file_name} exists, merged from template."),
			MergeOutcome::Recovered { reason } => format!(
				"{file_name} could not be parsed ({reason}), rebuilt from template. Previous custom settings were discarded."
			),
		}
	}
}
