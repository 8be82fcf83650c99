use crate::config::parser::parse_config_file;
use crate::config::types::LoadedConfig;
use crate::error::Result;
use std::path::Path;

/// Name of the per-project configuration file.
pub const CONFIG_FILE_NAME: &str = ".jslint.toml";

/// Environment variable that, if truthy, disables linting regardless of config.
pub const DISABLE_ENV_VAR: &str = "JS_LINT_DISABLE";

/// Find the nearest `.jslint.toml`, starting at `start_dir` and walking up.
///
/// The first file found wins; there is no merging across directories.
pub fn discover_config(start_dir: &Path) -> Result<Option<LoadedConfig>> {
	let mut current_dir = Some(start_dir);

	while let Some(dir) = current_dir {
		let config_path = dir.join(CONFIG_FILE_NAME);

		if config_path.is_file() {
			tracing::debug!(path = %config_path.display(), "found config file");
			let config = parse_config_file(&config_path)?;
			return Ok(Some(LoadedConfig {
				config,
				path: config_path,
			}));
		}

		current_dir = dir.parent();
	}

	Ok(None)
}

/// Load an explicitly named config file, or discover one from `start_dir`.
pub fn load_config(explicit: Option<&Path>, start_dir: &Path) -> Result<Option<LoadedConfig>> {
	match explicit {
		Some(path) => {
			let path = start_dir.join(path);
			let config = parse_config_file(&path)?;
			Ok(Some(LoadedConfig { config, path }))
		}
		None => discover_config(start_dir),
	}
}

/// Check if an environment variable is set to a truthy value.
pub fn is_env_truthy(var_name: &str) -> bool {
	match std::env::var(var_name) {
		Ok(value) => {
			let lower = value.to_lowercase();
			!value.is_empty() && lower != "0" && lower != "false" && lower != "no"
		}
		Err(_) => false,
	}
}
