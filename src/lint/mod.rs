//! Lint dispatch for jslint.
//!
//! This module handles:
//! - Filtering a changed-file list down to JavaScript files
//! - Running the linter once per target
//! - Folding per-target exit codes into one pass/fail result

pub mod dispatch;

/// How much output the linter is asked to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
	#[default]
	Normal,
	Verbose,
	VeryVerbose,
}

impl Verbosity {
	/// Map a repeated `-v` count to a verbosity level.
	pub fn from_occurrences(count: u8) -> Self {
		match count {
			0 => Verbosity::Normal,
			1 => Verbosity::Verbose,
			_ => Verbosity::VeryVerbose,
		}
	}
}

/// Suffix a path must end with to be linted from a file list.
pub const JS_SUFFIX: &str = ".js";

/// Split a newline-separated file list and keep the `.js` entries, in order.
pub fn filter_js_files(file_list: &str) -> Vec<String> {
	file_list
		.lines()
		.map(str::trim)
		.filter(|file| !file.is_empty() && file.ends_with(JS_SUFFIX))
		.map(str::to_string)
		.collect()
}

/// 1 if any code is nonzero, else 0.
pub fn aggregate_exit_codes(codes: impl IntoIterator<Item = i32>) -> i32 {
	codes
		.into_iter()
		.fold(0, |acc, code| if code != 0 { 1 } else { acc })
}
