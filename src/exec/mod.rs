//! Command execution for jslint.
//!
//! This module handles:
//! - The `CommandRunner` seam the orchestrator runs subprocesses through
//! - Executing commands with inherited stdio and exit code propagation
//! - Git pre-commit hook and `.jslint.toml` template generation

pub mod scaffold;

#[cfg(test)]
pub(crate) mod testing;

use crate::error::{JsLintError, Result};
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

/// Runs an external program to completion and reports its exit code.
pub trait CommandRunner {
	fn run(&self, program: &Path, args: &[String], cwd: &Path) -> Result<i32>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
	fn run(&self, program: &Path, args: &[String], cwd: &Path) -> Result<i32> {
		(**self).run(program, args, cwd)
	}
}

/// Runs commands as real child processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
	fn run(&self, program: &Path, args: &[String], cwd: &Path) -> Result<i32> {
		tracing::debug!(
			program = %program.display(),
			args = %args.join(" "),
			cwd = %cwd.display(),
			"executing"
		);
		let status = execute_command(program, args, cwd)?;
		Ok(exit_code(status))
	}
}

/// Execute a command with proper stdio handling.
///
/// This function:
/// - Passes stdin, stdout, stderr through to the child process
/// - Blocks until the child exits and returns its status
pub fn execute_command(program: &Path, args: &[String], cwd: &Path) -> Result<ExitStatus> {
	let mut cmd = Command::new(program);
	cmd.args(args)
		.current_dir(cwd)
		.stdin(Stdio::inherit())
		.stdout(Stdio::inherit())
		.stderr(Stdio::inherit());

	let status = cmd.status().map_err(|source| {
		if source.kind() == std::io::ErrorKind::NotFound {
			JsLintError::CommandNotFound {
				command: program.to_string_lossy().to_string(),
			}
		} else {
			JsLintError::CommandFailed {
				command: program.to_string_lossy().to_string(),
				source,
			}
		}
	})?;

	Ok(status)
}

/// Exit code of a finished process; termination by signal counts as 1.
pub fn exit_code(status: ExitStatus) -> i32 {
	status.code().unwrap_or(1)
}
