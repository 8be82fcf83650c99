use std::path::PathBuf;

/// Library-level structured errors for jslint.
///
/// Use `thiserror` for structured errors that library consumers can match on.
/// The CLI binary wraps these with `anyhow` for rich context chains.
#[derive(Debug, thiserror::Error)]
pub enum JsLintError {
	#[error("Failed to read config file: {path}")]
	ConfigReadError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse config file: {path}")]
	ConfigParseError {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	#[error("Invalid configuration: {message}")]
	InvalidConfig { message: String },

	#[error("Failed to read template: {path}")]
	TemplateRead {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse rule template: {name}")]
	TemplateParse {
		name: String,
		#[source]
		source: serde_json::Error,
	},

	#[error("Rule template is not a JSON object: {name}")]
	TemplateNotObject { name: String },

	#[error("Failed to render rule document: {path}")]
	RenderRuleDocument {
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},

	#[error("Existing rule document is malformed: {path} ({reason})")]
	MalformedRuleDocument { path: PathBuf, reason: String },

	#[error("Failed to read file: {path}")]
	FileRead {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to write file: {path}")]
	FileWrite {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error(
		"Unable to setup eslint, please confirm node.js, npm, and npx are available ({command} exited with {exit_code})"
	)]
	InstallFailed { command: String, exit_code: i32 },

	#[error("JS Linting failed (exit code: {exit_code})")]
	LintFailed { exit_code: i32 },

	#[error("Command execution failed: {command}")]
	CommandFailed {
		command: String,
		#[source]
		source: std::io::Error,
	},

	#[error("Command not found: {command}")]
	CommandNotFound { command: String },

	#[error("Unknown hook event: {name}")]
	UnknownEvent { name: String },
}

/// Result type alias using JsLintError.
pub type Result<T> = std::result::Result<T, JsLintError>;
