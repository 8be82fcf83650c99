use crate::error::{JsLintError, Result};
use crate::exec::CommandRunner;
use crate::lint::{Verbosity, aggregate_exit_codes, filter_js_files};
use crate::orchestrator::Orchestrator;

impl<R: CommandRunner> Orchestrator<R> {
	/// Arguments passed to the linter for one target.
	pub fn linter_args(&self, target: &str) -> Vec<String> {
		let mut args = vec![target.to_string()];
		match self.verbosity {
			Verbosity::Normal => {}
			Verbosity::Verbose => args.push(self.settings.linter.verbose_flag.clone()),
			Verbosity::VeryVerbose => args.push(self.settings.linter.very_verbose_flag.clone()),
		}
		args
	}

	/// Run the linter against one file or directory and return its exit code.
	///
	/// A nonzero exit code is returned, not raised. Returns 0 without running
	/// anything when linting is disabled.
	pub fn sniff(&self, target: &str) -> Result<i32> {
		if !self.is_enabled() {
			tracing::debug!(lint_target = target, "js-lint disabled, skipping");
			return Ok(0);
		}

		let binary = self.settings.linter_binary();
		let code = self
			.runner
			.run(&binary, &self.linter_args(target), &self.settings.repo_root)?;
		tracing::debug!(lint_target = target, exit_code = code, "linter finished");

		Ok(code)
	}

	/// Run the linter against the configured default target.
	pub fn sniff_default(&self) -> Result<i32> {
		self.sniff(&self.settings.default_target())
	}

	/// Lint every `.js` entry of a newline-separated file list.
	///
	/// All files are attempted even after a failure; the result is 1 if any
	/// of them failed. A linter that cannot be spawned counts as exit code 127
	/// for that file.
	pub fn sniff_file_list(&self, file_list: &str) -> Result<i32> {
		if !self.is_enabled() {
			tracing::debug!("js-lint disabled, skipping file list");
			return Ok(0);
		}

		let files = filter_js_files(file_list);
		tracing::info!(count = files.len(), "sniffing changed files");

		let mut codes = Vec::with_capacity(files.len());
		for file in &files {
			let code = match self.sniff(file) {
				Ok(code) => code,
				Err(JsLintError::CommandNotFound { command }) => {
					tracing::warn!(lint_target = %file, %command, "linter not found");
					127
				}
				Err(e) => return Err(e),
			};
			codes.push(code);
		}

		Ok(aggregate_exit_codes(codes))
	}

	/// Lint the default target and fail if the linter reports problems.
	pub fn validate_all(&self) -> Result<()> {
		let exit_code = self.sniff_default()?;
		if exit_code != 0 {
			return Err(JsLintError::LintFailed { exit_code });
		}
		Ok(())
	}
}
