use crate::error::{JsLintError, Result};
use std::borrow::Cow;
use std::path::PathBuf;

/// Ignore-list template shipped with the binary.
pub const BUNDLED_IGNORE_TEMPLATE: &str = include_str!("../../templates/eslintignore.dist");

/// Rule document template shipped with the binary.
pub const BUNDLED_RULE_TEMPLATE: &str = include_str!("../../templates/eslintrc.json.dist");

/// Where a merge template comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
	Bundled {
		name: &'static str,
		content: &'static str,
	},
	File(PathBuf),
}

impl TemplateSource {
	pub fn ignore(path: Option<PathBuf>) -> Self {
		match path {
			Some(path) => TemplateSource::File(path),
			None => TemplateSource::Bundled {
				name: "eslintignore.dist",
				content: BUNDLED_IGNORE_TEMPLATE,
			},
		}
	}

	pub fn rules(path: Option<PathBuf>) -> Self {
		match path {
			Some(path) => TemplateSource::File(path),
			None => TemplateSource::Bundled {
				name: "eslintrc.json.dist",
				content: BUNDLED_RULE_TEMPLATE,
			},
		}
	}

	/// Name used in messages and errors.
	pub fn name(&self) -> String {
		match self {
			TemplateSource::Bundled { name, .. } => format!("bundled {name}"),
			TemplateSource::File(path) => path.display().to_string(),
		}
	}

	/// Read the template text. An unreadable file is fatal.
	pub fn load(&self) -> Result<Cow<'static, str>> {
		match self {
			TemplateSource::Bundled { content, .. } => Ok(Cow::Borrowed(*content)),
			TemplateSource::File(path) => std::fs::read_to_string(path)
				.map(Cow::Owned)
				.map_err(|source| JsLintError::TemplateRead {
					path: path.clone(),
					source,
				}),
		}
	}
}
