use crate::config::ProjectSettings;
use crate::exec::{CommandRunner, ProcessRunner};
use crate::lint::Verbosity;

/// Runs setup and lint dispatch for one project.
///
/// Linting lives in [`crate::lint`], setup in [`crate::setup`]; both are
/// methods on this type so they share settings, runner and verbosity.
#[derive(Debug)]
pub struct Orchestrator<R: CommandRunner = ProcessRunner> {
	pub settings: ProjectSettings,
	pub runner: R,
	pub verbosity: Verbosity,
}

impl Orchestrator<ProcessRunner> {
	/// Orchestrator that runs real subprocesses.
	pub fn new(settings: ProjectSettings, verbosity: Verbosity) -> Self {
		Self::with_runner(settings, ProcessRunner, verbosity)
	}
}

impl<R: CommandRunner> Orchestrator<R> {
	pub fn with_runner(settings: ProjectSettings, runner: R, verbosity: Verbosity) -> Self {
		Orchestrator {
			settings,
			runner,
			verbosity,
		}
	}

	pub fn is_enabled(&self) -> bool {
		self.settings.enabled
	}
}
