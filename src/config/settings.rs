use crate::config::discover::{DISABLE_ENV_VAR, is_env_truthy, load_config};
use crate::config::types::{Config, InstallerConfig, LinterConfig, LoadedConfig};
use crate::error::Result;
use std::path::{Path, PathBuf};

/// Project-level ignore file, relative to the repository root.
pub const IGNORE_FILE_NAME: &str = ".eslintignore";

/// Project-level rule document, relative to the docroot.
pub const RULE_FILE_NAME: &str = ".eslintrc.json";

/// Values supplied on the command line, taking precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
	/// Config file to load instead of discovering one.
	pub config: Option<PathBuf>,

	/// Repository root, relative to the working directory.
	pub repo_root: Option<PathBuf>,

	/// Docroot, relative to the repository root.
	pub docroot: Option<PathBuf>,
}

/// Fully resolved settings every operation receives.
#[derive(Debug, Clone)]
pub struct ProjectSettings {
	pub enabled: bool,
	pub repo_root: PathBuf,
	pub docroot: PathBuf,

	/// Docroot with the repository root prefix removed, e.g. `web`.
	pub docroot_dir: String,

	pub strict_rule_document: bool,
	pub linter: LinterConfig,
	pub installer: InstallerConfig,
	pub ignore_template: Option<PathBuf>,
	pub rule_template: Option<PathBuf>,

	/// Config file these settings came from, if any.
	pub source: Option<PathBuf>,
}

impl ProjectSettings {
	/// Combine an optional loaded config with CLI overrides.
	///
	/// `disabled_by_env` forces `enabled` off, whatever the config says.
	pub fn resolve(
		loaded: Option<&LoadedConfig>,
		cwd: &Path,
		overrides: &Overrides,
		disabled_by_env: bool,
	) -> Self {
		let default_config = Config::default();
		let config = loaded.map(|l| &l.config).unwrap_or(&default_config);
		let config_dir = loaded
			.and_then(|l| l.path.parent())
			.unwrap_or(cwd)
			.to_path_buf();

		let repo_root = match (&overrides.repo_root, &config.repo_root) {
			(Some(dir), _) => cwd.join(dir),
			(None, Some(dir)) => config_dir.join(dir),
			(None, None) => config_dir,
		};

		let docroot = match (&overrides.docroot, &config.docroot) {
			(Some(dir), _) | (None, Some(dir)) => repo_root.join(dir),
			(None, None) => repo_root.join("docroot"),
		};

		let docroot_dir = relative_docroot(&repo_root, &docroot);

		ProjectSettings {
			enabled: config.js_lint && !disabled_by_env,
			ignore_template: config.templates.ignore.as_ref().map(|p| repo_root.join(p)),
			rule_template: config.templates.rules.as_ref().map(|p| repo_root.join(p)),
			repo_root,
			docroot,
			docroot_dir,
			strict_rule_document: config.strict_rule_document,
			linter: config.linter.clone(),
			installer: config.installer.clone(),
			source: loaded.map(|l| l.path.clone()),
		}
	}

	/// Absolute path of the linter executable.
	pub fn linter_binary(&self) -> PathBuf {
		self.repo_root.join(&self.linter.binary)
	}

	pub fn ignore_file(&self) -> PathBuf {
		self.repo_root.join(IGNORE_FILE_NAME)
	}

	pub fn rule_file(&self) -> PathBuf {
		self.docroot.join(RULE_FILE_NAME)
	}

	/// Target linted when no file list is given.
	pub fn default_target(&self) -> String {
		if let Some(ref target) = self.linter.default_target {
			return target.clone();
		}
		if self.docroot_dir.is_empty() {
			".".to_string()
		} else {
			self.docroot_dir.clone()
		}
	}
}

/// Discover config from `cwd` and resolve it, honoring `JS_LINT_DISABLE`.
pub fn load_settings(cwd: &Path, overrides: &Overrides) -> Result<ProjectSettings> {
	let loaded = load_config(overrides.config.as_deref(), cwd)?;
	Ok(ProjectSettings::resolve(
		loaded.as_ref(),
		cwd,
		overrides,
		is_env_truthy(DISABLE_ENV_VAR),
	))
}

/// Docroot expressed relative to the repository root, without leading or
/// trailing separators.
pub fn relative_docroot(repo_root: &Path, docroot: &Path) -> String {
	let relative = match docroot.strip_prefix(repo_root) {
		Ok(rest) => rest.to_string_lossy().to_string(),
		Err(_) => docroot.to_string_lossy().to_string(),
	};
	relative.trim_matches(|c| c == '/' || c == '\\').to_string()
}
