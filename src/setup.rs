//! Project setup: install the linter packages, then merge both config files.

use crate::config::settings::{IGNORE_FILE_NAME, RULE_FILE_NAME};
use crate::error::{JsLintError, Result};
use crate::exec::CommandRunner;
use crate::merge::{MergeOutcome, TemplateSource, merge_ignore_file, merge_rule_file, parse_rule_template};
use crate::orchestrator::Orchestrator;
use std::path::{Path, PathBuf};

/// Result of merging one project file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMerge {
	pub path: PathBuf,
	pub outcome: MergeOutcome,
}

/// What `setup` did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupReport {
	/// Linting is disabled; nothing was installed or written.
	Skipped,
	Completed { ignore: FileMerge, rules: FileMerge },
}

impl<R: CommandRunner> Orchestrator<R> {
	/// Install the linter packages and merge the bundled templates.
	///
	/// Installer failure aborts before either file is touched.
	pub fn setup(&self) -> Result<SetupReport> {
		if !self.is_enabled() {
			tracing::debug!("js-lint disabled, skipping setup");
			return Ok(SetupReport::Skipped);
		}

		self.install_tooling()?;

		let ignore = self.merge_ignore()?;
		let rules = self.merge_rules()?;

		Ok(SetupReport::Completed { ignore, rules })
	}

	/// Run the package installer in the repository root.
	pub fn install_tooling(&self) -> Result<()> {
		let installer = &self.settings.installer;
		let args = installer.invocation_args();
		let command = format!("{} {}", installer.command, args.join(" "));
		tracing::info!(%command, "installing lint tooling");

		let exit_code = match self.runner.run(
			Path::new(&installer.command),
			&args,
			&self.settings.repo_root,
		) {
			Ok(code) => code,
			Err(JsLintError::CommandNotFound { .. }) => 127,
			Err(e) => return Err(e),
		};

		if exit_code != 0 {
			return Err(JsLintError::InstallFailed { command, exit_code });
		}

		Ok(())
	}

	fn merge_ignore(&self) -> Result<FileMerge> {
		let template = TemplateSource::ignore(self.settings.ignore_template.clone()).load()?;
		let path = self.settings.ignore_file();
		let outcome = merge_ignore_file(&path, &template, &self.settings.docroot_dir)?;
		tracing::info!(path = %path.display(), ?outcome, "merged {IGNORE_FILE_NAME}");

		Ok(FileMerge { path, outcome })
	}

	fn merge_rules(&self) -> Result<FileMerge> {
		let source = TemplateSource::rules(self.settings.rule_template.clone());
		let template = parse_rule_template(&source.load()?, &source.name())?;
		let path = self.settings.rule_file();
		let outcome = merge_rule_file(&path, &template, self.settings.strict_rule_document)?;
		tracing::info!(path = %path.display(), ?outcome, "merged {RULE_FILE_NAME}");

		Ok(FileMerge { path, outcome })
	}
}
