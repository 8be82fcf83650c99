use crate::error::{JsLintError, Result};
use crate::merge::MergeOutcome;
use std::collections::HashSet;
use std::path::Path;

/// Path segment in template lines replaced by the project's docroot directory.
pub const DOCROOT_PLACEHOLDER: &str = "docroot/";

/// Split text on line breaks, dropping empty entries.
pub fn split_lines(text: &str) -> Vec<String> {
	text.lines()
		.filter(|line| !line.is_empty())
		.map(str::to_string)
		.collect()
}

/// Replace the docroot placeholder with `<docroot_dir>/`.
///
/// An empty `docroot_dir` means the docroot is the repository root, so the
/// placeholder is removed entirely.
pub fn substitute_docroot(line: &str, docroot_dir: &str) -> String {
	if docroot_dir.is_empty() {
		line.replace(DOCROOT_PLACEHOLDER, "")
	} else {
		line.replace(DOCROOT_PLACEHOLDER, &format!("{docroot_dir}/"))
	}
}

/// Append substituted template lines that are not already present.
///
/// Existing entries keep their order and are never removed.
pub fn merge_ignore_list(
	template_lines: &[String],
	existing_lines: &[String],
	docroot_dir: &str,
) -> Vec<String> {
	let mut merged: Vec<String> = existing_lines
		.iter()
		.filter(|line| !line.is_empty())
		.cloned()
		.collect();
	let mut seen: HashSet<String> = merged.iter().cloned().collect();

	for line in template_lines {
		let line = substitute_docroot(line, docroot_dir);
		if line.is_empty() {
			continue;
		}
		if seen.insert(line.clone()) {
			merged.push(line);
		}
	}

	merged
}

/// Join merged lines into file content ending with a single newline.
pub fn render_ignore_list(lines: &[String]) -> String {
	let mut content = lines.join("\n");
	content.push('\n');
	content
}

/// Merge `template` into the ignore file at `path`, rewriting it in full.
pub fn merge_ignore_file(path: &Path, template: &str, docroot_dir: &str) -> Result<MergeOutcome> {
	let (existing, outcome) = if path.exists() {
		let content = std::fs::read_to_string(path).map_err(|source| JsLintError::FileRead {
			path: path.to_path_buf(),
			source,
		})?;
		(split_lines(&content), MergeOutcome::Merged)
	} else {
		(Vec::new(), MergeOutcome::Created)
	};

	let merged = merge_ignore_list(&split_lines(template), &existing, docroot_dir);
	tracing::info!(
		path = %path.display(),
		existing = existing.len(),
		added = merged.len() - existing.len(),
		"merging ignore list"
	);

	write_file(path, &render_ignore_list(&merged))?;
	Ok(outcome)
}

pub(crate) fn write_file(path: &Path, content: &str) -> Result<()> {
	if let Some(parent) = path.parent()
		&& !parent.as_os_str().is_empty()
	{
		std::fs::create_dir_all(parent).map_err(|source| JsLintError::FileWrite {
			path: path.to_path_buf(),
			source,
		})?;
	}

	std::fs::write(path, content).map_err(|source| JsLintError::FileWrite {
		path: path.to_path_buf(),
		source,
	})?;
	tracing::debug!(path = %path.display(), bytes = content.len(), "wrote file");

	Ok(())
}
