use crate::error::Result;
use crate::exec::CommandRunner;
use std::cell::RefCell;
use std::path::{Path, PathBuf};

/// One recorded call to a `RecordingRunner`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
	pub program: PathBuf,
	pub args: Vec<String>,
	pub cwd: PathBuf,
}

/// Records every invocation and answers with a scripted exit code.
pub struct RecordingRunner {
	calls: RefCell<Vec<Invocation>>,
	respond: Box<dyn Fn(&Path, &[String]) -> i32>,
}

impl RecordingRunner {
	/// Every command succeeds.
	pub fn succeeding() -> Self {
		Self::with(|_, _| 0)
	}

	pub fn with(respond: impl Fn(&Path, &[String]) -> i32 + 'static) -> Self {
		RecordingRunner {
			calls: RefCell::new(Vec::new()),
			respond: Box::new(respond),
		}
	}

	pub fn calls(&self) -> Vec<Invocation> {
		self.calls.borrow().clone()
	}
}

impl CommandRunner for RecordingRunner {
	fn run(&self, program: &Path, args: &[String], cwd: &Path) -> Result<i32> {
		self.calls.borrow_mut().push(Invocation {
			program: program.to_path_buf(),
			args: args.to_vec(),
			cwd: cwd.to_path_buf(),
		});
		Ok((self.respond)(program, args))
	}
}
