use serde::Deserialize;
use std::path::PathBuf;

use crate::error::JsLintError;

/// Top-level configuration from a `.jslint.toml` file.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
	/// Master switch. When false every operation is a silent no-op.
	#[serde(default = "default_true")]
	pub js_lint: bool,

	/// Repository root, relative to the directory holding the config file.
	#[serde(default)]
	pub repo_root: Option<PathBuf>,

	/// Web root, relative to the repository root.
	#[serde(default)]
	pub docroot: Option<PathBuf>,

	/// Fail setup instead of warning when the existing `.eslintrc.json` cannot be parsed.
	#[serde(default)]
	pub strict_rule_document: bool,

	#[serde(default)]
	pub linter: LinterConfig,

	#[serde(default)]
	pub installer: InstallerConfig,

	#[serde(default)]
	pub templates: TemplateConfig,
}

/// How the linter binary is invoked.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct LinterConfig {
	/// Linter executable, relative to the repository root.
	#[serde(default = "default_linter_binary")]
	pub binary: PathBuf,

	/// Target linted by `validate:js`. Defaults to the docroot directory.
	#[serde(default)]
	pub default_target: Option<String>,

	#[serde(default = "default_verbose_flag")]
	pub verbose_flag: String,

	#[serde(default = "default_very_verbose_flag")]
	pub very_verbose_flag: String,
}

/// Package manager invocation used by setup.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct InstallerConfig {
	#[serde(default = "default_installer_command")]
	pub command: String,

	#[serde(default = "default_installer_args")]
	pub args: Vec<String>,

	#[serde(default = "default_installer_packages")]
	pub packages: Vec<String>,
}

/// Optional overrides for the bundled merge templates.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TemplateConfig {
	/// Ignore-list template, relative to the repository root.
	pub ignore: Option<PathBuf>,

	/// Rule document template, relative to the repository root.
	pub rules: Option<PathBuf>,
}

/// A loaded configuration with its source path for debugging/display.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
	/// The parsed configuration.
	pub config: Config,

	/// The path this config was loaded from.
	pub path: PathBuf,
}

fn default_true() -> bool {
	true
}

fn default_linter_binary() -> PathBuf {
	PathBuf::from("node_modules/.bin/eslint")
}

fn default_verbose_flag() -> String {
	"-v".to_string()
}

fn default_very_verbose_flag() -> String {
	"-vv".to_string()
}

fn default_installer_command() -> String {
	"npm".to_string()
}

fn default_installer_args() -> Vec<String> {
	vec!["install".to_string(), "--save-dev".to_string()]
}

fn default_installer_packages() -> Vec<String> {
	vec![
		"eslint".to_string(),
		"eslint-config-drupal".to_string(),
		"eslint-plugin-yml".to_string(),
	]
}

impl Default for Config {
	fn default() -> Self {
		Config {
			js_lint: true,
			repo_root: None,
			docroot: None,
			strict_rule_document: false,
			linter: LinterConfig::default(),
			installer: InstallerConfig::default(),
			templates: TemplateConfig::default(),
		}
	}
}

impl Default for LinterConfig {
	fn default() -> Self {
		LinterConfig {
			binary: default_linter_binary(),
			default_target: None,
			verbose_flag: default_verbose_flag(),
			very_verbose_flag: default_very_verbose_flag(),
		}
	}
}

impl Default for InstallerConfig {
	fn default() -> Self {
		InstallerConfig {
			command: default_installer_command(),
			args: default_installer_args(),
			packages: default_installer_packages(),
		}
	}
}

impl InstallerConfig {
	/// Full argument list passed to the installer command.
	pub fn invocation_args(&self) -> Vec<String> {
		self.args.iter().chain(self.packages.iter()).cloned().collect()
	}
}

impl Config {
	/// Reject settings that would make setup or dispatch meaningless.
	pub fn validate(&self) -> Result<(), JsLintError> {
		if self.installer.command.trim().is_empty() {
			return Err(JsLintError::InvalidConfig {
				message: "installer.command must not be empty".to_string(),
			});
		}

		if self.installer.packages.is_empty() {
			return Err(JsLintError::InvalidConfig {
				message: "installer.packages must list at least one package".to_string(),
			});
		}

		if self.linter.verbose_flag == self.linter.very_verbose_flag {
			return Err(JsLintError::InvalidConfig {
				message: "linter.verbose-flag and linter.very-verbose-flag must differ".to_string(),
			});
		}

		Ok(())
	}
}
