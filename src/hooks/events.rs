use crate::error::{JsLintError, Result};
use crate::exec::CommandRunner;
use crate::orchestrator::Orchestrator;
use crate::setup::SetupReport;

/// Step name that fires after the version-control pre-commit step.
pub const PRE_COMMIT_STEP: &str = "internal:git-hook:execute:pre-commit";

/// Step name that fires after frontend build requirements are prepared.
pub const FRONTEND_REQS_STEP: &str = "source:build:frontend-reqs";

/// A completed build step jslint reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookEvent {
	/// Payload: newline-separated changed files, if the step produced any.
	PreCommit { changed_files: Option<String> },

	/// No payload.
	FrontendReqs,
}

impl HookEvent {
	/// Get the step name this event corresponds to.
	pub fn step_name(&self) -> &'static str {
		match self {
			HookEvent::PreCommit { .. } => PRE_COMMIT_STEP,
			HookEvent::FrontendReqs => FRONTEND_REQS_STEP,
		}
	}

	/// Build an event from a step name and its optional payload.
	pub fn from_step_name(name: &str, payload: Option<String>) -> Result<Self> {
		match name {
			PRE_COMMIT_STEP => Ok(HookEvent::PreCommit {
				changed_files: payload,
			}),
			FRONTEND_REQS_STEP => Ok(HookEvent::FrontendReqs),
			_ => Err(JsLintError::UnknownEvent {
				name: name.to_string(),
			}),
		}
	}
}

/// What handling an event did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookOutcome {
	/// The event carried nothing to act on.
	Skipped,

	/// Changed files were linted; the aggregate exit code is not escalated.
	Linted { exit_code: i32 },

	Setup(SetupReport),
}

/// Route an event to the matching orchestrator operation.
pub fn dispatch_event<R: CommandRunner>(
	orchestrator: &Orchestrator<R>,
	event: HookEvent,
) -> Result<HookOutcome> {
	tracing::debug!(step = event.step_name(), "dispatching event");

	match event {
		HookEvent::PreCommit { changed_files } => match changed_files {
			Some(files) if !files.trim().is_empty() => {
				let exit_code = orchestrator.sniff_file_list(&files)?;
				Ok(HookOutcome::Linted { exit_code })
			}
			_ => Ok(HookOutcome::Skipped),
		},
		HookEvent::FrontendReqs => orchestrator.setup().map(HookOutcome::Setup),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::config::{Overrides, ProjectSettings};
	use crate::exec::testing::RecordingRunner;
	use crate::lint::Verbosity;
	use std::path::Path;

	#[test]
	fn test_step_names_round_trip() {
		for event in [
			HookEvent::PreCommit {
				changed_files: Some("a.js".to_string()),
			},
			HookEvent::FrontendReqs,
		] {
			let payload = match &event {
				HookEvent::PreCommit { changed_files } => changed_files.clone(),
				HookEvent::FrontendReqs => None,
			};
			assert_eq!(
				HookEvent::from_step_name(event.step_name(), payload).unwrap(),
				event
			);
		}
	}

	#[test]
	fn test_unknown_step_name() {
		match HookEvent::from_step_name("validate:phpcs", None).unwrap_err() {
			JsLintError::UnknownEvent { name } => assert_eq!(name, "validate:phpcs"),
			other => panic!("Expected UnknownEvent, got {other:?}"),
		}
	}

	#[test]
	fn test_pre_commit_lints_changed_files() {
		let runner = RecordingRunner::with(|_, args| if args[0] == "b.js" { 1 } else { 0 });
		let settings =
			ProjectSettings::resolve(None, Path::new("/srv/site"), &Overrides::default(), false);
		let orchestrator = Orchestrator::with_runner(settings, &runner, Verbosity::Normal);

		let outcome = dispatch_event(
			&orchestrator,
			HookEvent::PreCommit {
				changed_files: Some("a.js\nb.js\nstyle.css".to_string()),
			},
		)
		.unwrap();

		assert_eq!(outcome, HookOutcome::Linted { exit_code: 1 });
		assert_eq!(runner.calls().len(), 2);
	}

	#[test]
	fn test_pre_commit_without_changed_files_is_skipped() {
		let runner = RecordingRunner::succeeding();
		let settings =
			ProjectSettings::resolve(None, Path::new("/srv/site"), &Overrides::default(), false);
		let orchestrator = Orchestrator::with_runner(settings, &runner, Verbosity::Normal);

		for changed_files in [None, Some(String::new()), Some("\n".to_string())] {
			let outcome =
				dispatch_event(&orchestrator, HookEvent::PreCommit { changed_files }).unwrap();
			assert_eq!(outcome, HookOutcome::Skipped);
		}
		assert!(runner.calls().is_empty());
	}

	#[test]
	fn test_frontend_reqs_disabled_skips_setup() {
		let runner = RecordingRunner::succeeding();
		let settings =
			ProjectSettings::resolve(None, Path::new("/srv/site"), &Overrides::default(), true);
		let orchestrator = Orchestrator::with_runner(settings, &runner, Verbosity::Normal);

		let outcome = dispatch_event(&orchestrator, HookEvent::FrontendReqs).unwrap();

		assert_eq!(outcome, HookOutcome::Setup(SetupReport::Skipped));
		assert!(runner.calls().is_empty());
	}

	#[test]
	fn test_frontend_reqs_runs_setup() {
		let temp_dir = tempfile::tempdir().unwrap();
		let runner = RecordingRunner::succeeding();
		let settings =
			ProjectSettings::resolve(None, temp_dir.path(), &Overrides::default(), false);
		let orchestrator = Orchestrator::with_runner(settings, &runner, Verbosity::Normal);

		let outcome = dispatch_event(&orchestrator, HookEvent::FrontendReqs).unwrap();

		match outcome {
			HookOutcome::Setup(SetupReport::Completed { ignore, rules }) => {
				assert_eq!(ignore.path, temp_dir.path().join(".eslintignore"));
				assert_eq!(rules.path, temp_dir.path().join("docroot/.eslintrc.json"));
			}
			other => panic!("Expected completed setup, got {other:?}"),
		}
		assert_eq!(runner.calls().len(), 1);
		assert!(temp_dir.path().join(".eslintignore").exists());
		assert!(temp_dir.path().join("docroot/.eslintrc.json").exists());
	}
}
