use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use jslint_cli::Orchestrator;
use jslint_cli::config::{CONFIG_FILE_NAME, Overrides, ProjectSettings, load_settings};
use jslint_cli::exec::scaffold::{generate_init_template, generate_pre_commit_hook};
use jslint_cli::hooks::{HookEvent, HookOutcome, dispatch_event};
use jslint_cli::lint::Verbosity;
use jslint_cli::merge::MergeOutcome;
use jslint_cli::setup::{FileMerge, SetupReport};

/// Environment variable holding a `tracing` filter directive.
const LOG_ENV_VAR: &str = "JSLINT_LOG";

#[derive(Parser)]
#[command(name = "jslint")]
#[command(
	author,
	version,
	about = "CLI tool for installing, configuring and running ESLint in a project build"
)]
#[command(arg_required_else_help = true)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	/// Increase linter verbosity (-v verbose, -vv very verbose)
	#[arg(short, long, action = ArgAction::Count, global = true)]
	verbose: u8,

	/// Repository root (defaults to the directory holding .jslint.toml)
	#[arg(long, value_name = "DIR", global = true)]
	repo_root: Option<PathBuf>,

	/// Docroot, relative to the repository root
	#[arg(long, value_name = "DIR", global = true)]
	docroot: Option<PathBuf>,

	/// Config file to use instead of discovering .jslint.toml
	#[arg(long, value_name = "FILE", global = true)]
	config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
	/// Install eslint and merge the template .eslintignore and .eslintrc.json
	Setup,

	/// Lint the whole default target; fails if any problem is reported
	#[command(name = "validate:js")]
	ValidateJs,

	/// Lint a newline-separated list of files; exits with the aggregate code
	#[command(name = "validate:jslint:files")]
	ValidateFiles {
		/// Files to lint, separated by newlines ("-" reads from stdin)
		file_list: String,
	},

	/// React to a completed build step
	Hook {
		#[command(subcommand)]
		event: HookCommand,
	},

	/// Print (or install) a git pre-commit hook that lints staged files
	HookScript {
		/// Write the hook to .git/hooks/pre-commit in the repository root
		#[arg(long)]
		install: bool,

		/// Overwrite an existing pre-commit hook
		#[arg(long, requires = "install")]
		force: bool,
	},

	/// Create a template .jslint.toml in the current directory
	Init {
		/// Overwrite existing .jslint.toml
		#[arg(long)]
		force: bool,
	},

	/// Configuration management commands
	Config {
		#[command(subcommand)]
		action: ConfigAction,
	},
}

#[derive(Subcommand)]
enum HookCommand {
	/// The git pre-commit step finished
	PreCommit {
		/// Newline-separated changed files
		changed_files: Option<String>,
	},
	/// Frontend build requirements were prepared
	FrontendReqs,
	/// A build step identified by its step name
	Step {
		/// Step name, e.g. source:build:frontend-reqs
		name: String,
		/// Step payload (the changed-file list for the pre-commit step)
		payload: Option<String>,
	},
}

#[derive(Subcommand)]
enum ConfigAction {
	/// Display the resolved settings and where they came from
	Show,
}

fn main() -> ExitCode {
	let cli = Cli::parse();
	let verbosity = Verbosity::from_occurrences(cli.verbose);
	init_logging(verbosity);

	match run(cli, verbosity) {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn init_logging(verbosity: Verbosity) {
	let default_level = match verbosity {
		Verbosity::Normal => "warn",
		Verbosity::Verbose => "info",
		Verbosity::VeryVerbose => "debug",
	};
	let filter =
		EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(default_level));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.init();
}

fn run(cli: Cli, verbosity: Verbosity) -> Result<ExitCode> {
	let cwd = std::env::current_dir().context("Failed to get current directory")?;

	let overrides = Overrides {
		config: cli.config,
		repo_root: cli.repo_root,
		docroot: cli.docroot,
	};
	let orchestrator = || -> Result<Orchestrator> {
		let settings = load_settings(&cwd, &overrides).context("Failed to load configuration")?;
		Ok(Orchestrator::new(settings, verbosity))
	};

	match cli.command {
		// Init works without (and before) any config file
		Commands::Init { force } => handle_init(&cwd, force),
		Commands::Setup => handle_setup(&orchestrator()?),
		Commands::ValidateJs => handle_validate_js(&orchestrator()?),
		Commands::ValidateFiles { file_list } => {
			handle_validate_files(&orchestrator()?, &file_list)
		}
		Commands::Hook { event } => handle_hook(&orchestrator()?, event),
		Commands::HookScript { install, force } => {
			handle_hook_script(&orchestrator()?.settings, install, force)
		}
		Commands::Config { action } => match action {
			ConfigAction::Show => handle_config_show(&orchestrator()?.settings),
		},
	}
}

fn handle_setup(orchestrator: &Orchestrator) -> Result<ExitCode> {
	let report = orchestrator
		.setup()
		.context("Failed to set up JS linting")?;
	print_setup_report(&report);
	Ok(ExitCode::SUCCESS)
}

fn print_setup_report(report: &SetupReport) {
	match report {
		SetupReport::Skipped => println!("js-lint is disabled, skipping setup."),
		SetupReport::Completed { ignore, rules } => {
			print_file_merge(ignore);
			print_file_merge(rules);
		}
	}
}

fn print_file_merge(merge: &FileMerge) {
	let name = merge
		.path
		.file_name()
		.map(|n| n.to_string_lossy().to_string())
		.unwrap_or_else(|| merge.path.display().to_string());

	if let MergeOutcome::Recovered { .. } = merge.outcome {
		eprintln!("Warning: {}", merge.outcome.describe(&name));
	} else {
		println!("{}", merge.outcome.describe(&name));
	}
}

fn handle_validate_js(orchestrator: &Orchestrator) -> Result<ExitCode> {
	orchestrator.validate_all()?;
	Ok(ExitCode::SUCCESS)
}

fn handle_validate_files(orchestrator: &Orchestrator, file_list: &str) -> Result<ExitCode> {
	let file_list = if file_list == "-" {
		let mut buf = String::new();
		std::io::stdin()
			.read_to_string(&mut buf)
			.context("Failed to read file list from stdin")?;
		buf
	} else {
		file_list.to_string()
	};

	println!("Sniffing changed files...");
	let exit_code = orchestrator.sniff_file_list(&file_list)?;
	Ok(ExitCode::from(exit_code as u8))
}

fn handle_hook(orchestrator: &Orchestrator, event: HookCommand) -> Result<ExitCode> {
	let event = match event {
		HookCommand::PreCommit { changed_files } => HookEvent::PreCommit { changed_files },
		HookCommand::FrontendReqs => HookEvent::FrontendReqs,
		HookCommand::Step { name, payload } => HookEvent::from_step_name(&name, payload)?,
	};
	let step = event.step_name();

	let outcome = dispatch_event(orchestrator, event)
		.with_context(|| format!("Failed to handle {step}"))?;

	match outcome {
		HookOutcome::Skipped => Ok(ExitCode::SUCCESS),
		// The hook runner decides what a nonzero code means
		HookOutcome::Linted { exit_code } => Ok(ExitCode::from(exit_code as u8)),
		HookOutcome::Setup(report) => {
			print_setup_report(&report);
			Ok(ExitCode::SUCCESS)
		}
	}
}

fn handle_hook_script(settings: &ProjectSettings, install: bool, force: bool) -> Result<ExitCode> {
	let binary = std::env::current_exe().context("Failed to locate the jslint executable")?;
	let script = generate_pre_commit_hook(&binary);

	if !install {
		print!("{}", script);
		return Ok(ExitCode::SUCCESS);
	}

	let hooks_dir = settings.repo_root.join(".git").join("hooks");
	if !hooks_dir.is_dir() {
		anyhow::bail!(
			"{} does not exist. Is {} a git repository?",
			hooks_dir.display(),
			settings.repo_root.display()
		);
	}

	let hook_path = hooks_dir.join("pre-commit");
	if hook_path.exists() && !force {
		anyhow::bail!(
			"{} already exists. Use --force to overwrite.",
			hook_path.display()
		);
	}

	write_executable(&hook_path, &script)?;
	println!("Installed {}", hook_path.display());
	Ok(ExitCode::SUCCESS)
}

fn write_executable(path: &Path, content: &str) -> Result<()> {
	std::fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;

	#[cfg(unix)]
	{
		use std::os::unix::fs::PermissionsExt;
		std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755))
			.with_context(|| format!("Failed to make {} executable", path.display()))?;
	}

	Ok(())
}

fn handle_init(cwd: &Path, force: bool) -> Result<ExitCode> {
	let config_path = cwd.join(CONFIG_FILE_NAME);

	if config_path.exists() && !force {
		anyhow::bail!("{CONFIG_FILE_NAME} already exists. Use --force to overwrite.");
	}

	std::fs::write(&config_path, generate_init_template())
		.with_context(|| format!("Failed to write {}", config_path.display()))?;

	println!("Created {CONFIG_FILE_NAME}");
	Ok(ExitCode::SUCCESS)
}

fn handle_config_show(settings: &ProjectSettings) -> Result<ExitCode> {
	match settings.source {
		Some(ref path) => println!("# Source: {}", path.display()),
		None => println!("# Source: defaults (no {CONFIG_FILE_NAME} found)"),
	}
	println!("js-lint: {}", settings.enabled);
	println!("repo-root: {}", settings.repo_root.display());
	println!("docroot: {}", settings.docroot.display());
	println!("docroot-dir: {}", settings.docroot_dir);
	println!("strict-rule-document: {}", settings.strict_rule_document);
	println!();

	println!("linter:");
	println!("  binary: {}", settings.linter_binary().display());
	println!("  default-target: {}", settings.default_target());
	println!("  verbose-flag: {}", settings.linter.verbose_flag);
	println!("  very-verbose-flag: {}", settings.linter.very_verbose_flag);
	println!();

	println!("installer:");
	println!(
		"  command: {} {}",
		settings.installer.command,
		settings.installer.invocation_args().join(" ")
	);
	println!();

	println!("files:");
	println!("  ignore: {}", settings.ignore_file().display());
	println!("  rules: {}", settings.rule_file().display());
	if let Some(ref path) = settings.ignore_template {
		println!("  ignore-template: {}", path.display());
	}
	if let Some(ref path) = settings.rule_template {
		println!("  rules-template: {}", path.display());
	}

	Ok(ExitCode::SUCCESS)
}
