//! Generated files: the git pre-commit hook and the starter `.jslint.toml`.

use std::path::Path;

/// Generate a git pre-commit hook that lints staged files through `binary`.
///
/// The hook exits with the linter's aggregate exit code, so git aborts the
/// commit when any staged `.js` file fails.
pub fn generate_pre_commit_hook(binary: &Path) -> String {
	format!(
		r#"#!/bin/sh
# Installed by jslint. Lints staged JavaScript files before each commit.
files=$(git diff --cached --name-only --diff-filter=ACMR)
if [ -z "$files" ]; then
	exit 0
fi
exec {binary} hook pre-commit "$files"
"#,
		binary = shell_quote(&binary.to_string_lossy())
	)
}

/// Generate a template `.jslint.toml` with every key at its default.
pub fn generate_init_template() -> String {
	r#"# jslint configuration
# Paths are relative to this file unless noted otherwise.

# Set to false to turn setup and linting into no-ops.
js-lint = true

# Repository root (where package.json and .eslintignore live).
repo-root = "."

# Web root, relative to repo-root. .eslintrc.json is written here.
docroot = "docroot"

# Fail setup instead of rebuilding an unparseable .eslintrc.json.
strict-rule-document = false

[linter]
# Relative to repo-root.
binary = "node_modules/.bin/eslint"
# default-target = "docroot/modules/custom"
verbose-flag = "-v"
very-verbose-flag = "-vv"

[installer]
command = "npm"
args = ["install", "--save-dev"]
packages = ["eslint", "eslint-config-drupal", "eslint-plugin-yml"]

[templates]
# Replace the bundled merge templates (relative to repo-root).
# ignore = "config/eslintignore.dist"
# rules = "config/eslintrc.json.dist"
"#
	.to_string()
}

/// Quote a string for POSIX sh using single quotes.
fn shell_quote(value: &str) -> String {
	format!("'{}'", value.replace('\'', r"'\''"))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::config::parse_config_str;
	use std::path::PathBuf;

	#[test]
	fn test_pre_commit_hook_contents() {
		let script = generate_pre_commit_hook(Path::new("/usr/local/bin/jslint"));

		assert!(script.starts_with("#!/bin/sh\n"));
		assert!(script.contains("git diff --cached --name-only --diff-filter=ACMR"));
		assert!(script.contains("exec '/usr/local/bin/jslint' hook pre-commit \"$files\""));
	}

	#[test]
	fn test_shell_quote_escapes_single_quotes() {
		assert_eq!(shell_quote("it's"), r"'it'\''s'");
		assert_eq!(shell_quote("/a b/c"), "'/a b/c'");
	}

	#[test]
	fn test_init_template_parses_to_defaults() {
		let config =
			parse_config_str(&generate_init_template(), &PathBuf::from(".jslint.toml")).unwrap();

		assert!(config.js_lint);
		assert_eq!(config.docroot, Some(PathBuf::from("docroot")));
		assert_eq!(config.installer.packages.len(), 3);
		assert!(config.templates.ignore.is_none());
	}
}
