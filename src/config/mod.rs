//! Configuration loading and parsing for jslint.
//!
//! This module handles:
//! - TOML config file parsing
//! - Upward discovery of `.jslint.toml`
//! - Resolution into the settings every operation receives

pub mod discover;
pub mod parser;
pub mod settings;
pub mod types;

pub use discover::{CONFIG_FILE_NAME, DISABLE_ENV_VAR, discover_config, is_env_truthy, load_config};
pub use parser::{parse_config_file, parse_config_str};
pub use settings::{Overrides, ProjectSettings, load_settings, relative_docroot};
pub use types::{Config, InstallerConfig, LinterConfig, LoadedConfig, TemplateConfig};
