//! jslint - CLI tool for installing, configuring and running ESLint in a project build.
//!
//! This library provides the core functionality for jslint, including:
//! - Configuration file parsing and discovery
//! - Merging bundled templates into `.eslintignore` and `.eslintrc.json`
//! - Linting a directory or a changed-file list with exit code aggregation
//! - Build-step events (pre-commit, frontend requirements)
//!
//! # Example
//!
//! ```no_run
//! use jslint_cli::config::{load_settings, Overrides};
//! use jslint_cli::lint::Verbosity;
//! use jslint_cli::Orchestrator;
//!
//! let cwd = std::env::current_dir().unwrap();
//! let settings = load_settings(&cwd, &Overrides::default()).unwrap();
//! let orchestrator = Orchestrator::new(settings, Verbosity::Normal);
//!
//! let exit_code = orchestrator.sniff_file_list("web/app.js\nREADME.md").unwrap();
//! println!("lint exit code: {exit_code}");
//! ```

pub mod config;
pub mod error;
pub mod exec;
pub mod hooks;
pub mod lint;
pub mod merge;
pub mod orchestrator;
pub mod setup;

pub use error::{JsLintError, Result};
pub use orchestrator::Orchestrator;
