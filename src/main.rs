use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use commitrc_cli::composed_configuration;
use commitrc_cli::config::{CONFIG_FILE_NAME, LoadedProject, load_project_config};
use commitrc_cli::export::{render_json, write_export};
use commitrc_cli::ruleset::{TypeVerdict, allowed_types, check_type};

const INIT_TEMPLATE: &str = r#"# commitrc project configuration.
#
# Base ruleset to extend: "conventional" for the built-in conventional-commits
# preset, or a path to a .json/.toml ruleset relative to this file.
extends = "conventional"

# Where `commitrc export` writes the composed configuration.
output = ".commitlintrc.json"
"#;

#[derive(Parser)]
#[command(name = "commitrc")]
#[command(
	author,
	version,
	about = "CLI tool for composing commit-lint rulesets from a base preset and overrides"
)]
#[command(arg_required_else_help = true)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	/// Log composition details to stderr
	#[arg(short, long, global = true)]
	verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
	/// Create a template .commitrc.toml in the current directory
	Init {
		/// Overwrite an existing .commitrc.toml
		#[arg(long)]
		force: bool,
	},
	/// Print the composed configuration as JSON
	Show,
	/// Write the composed configuration for the commit linter
	Export {
		/// Destination file (defaults to the configured output)
		#[arg(long, short, value_name = "PATH")]
		output: Option<PathBuf>,
	},
	/// List the allowed commit types
	Types,
	/// Check whether a commit type is allowed
	Check {
		/// Commit type label, e.g. "feature"
		#[arg(value_name = "TYPE")]
		commit_type: String,
	},
	/// Configuration management commands
	Config {
		#[command(subcommand)]
		action: ConfigAction,
	},
}

#[derive(Subcommand)]
enum ConfigAction {
	/// Check the project config and base ruleset for errors
	Validate,
}

fn main() -> ExitCode {
	let cli = Cli::parse();
	init_tracing(cli.verbose);

	match run(cli.command) {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn init_tracing(verbose: bool) {
	let filter = if verbose {
		EnvFilter::new("debug")
	} else {
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
	};

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_target(false)
		.with_writer(std::io::stderr)
		.init();
}

fn run(command: Commands) -> Result<ExitCode> {
	match command {
		Commands::Init { force } => handle_init(force),
		Commands::Show => handle_show(),
		Commands::Export { output } => handle_export(output),
		Commands::Types => handle_types(),
		Commands::Check { commit_type } => handle_check(&commit_type),
		Commands::Config { action } => match action {
			ConfigAction::Validate => handle_config_validate(),
		},
	}
}

fn current_project() -> Result<LoadedProject> {
	let cwd = std::env::current_dir().context("Failed to get current directory")?;
	load_project_config(&cwd).context("Failed to load configuration")
}

fn handle_init(force: bool) -> Result<ExitCode> {
	let config_path = PathBuf::from(CONFIG_FILE_NAME);

	if config_path.exists() && !force {
		anyhow::bail!("{CONFIG_FILE_NAME} already exists. Use --force to overwrite.");
	}

	std::fs::write(&config_path, INIT_TEMPLATE)
		.with_context(|| format!("Failed to write {}", config_path.display()))?;

	println!("Created {CONFIG_FILE_NAME}");
	Ok(ExitCode::SUCCESS)
}

fn handle_show() -> Result<ExitCode> {
	let project = current_project()?;
	let config = composed_configuration(&project).context("Failed to compose configuration")?;

	print!("{}", render_json(&config)?);
	Ok(ExitCode::SUCCESS)
}

fn handle_export(output: Option<PathBuf>) -> Result<ExitCode> {
	let project = current_project()?;
	let config = composed_configuration(&project).context("Failed to compose configuration")?;

	let path = output.unwrap_or_else(|| project.output_path());
	write_export(&config, &path)?;

	println!("Wrote {}", path.display());
	Ok(ExitCode::SUCCESS)
}

fn handle_types() -> Result<ExitCode> {
	let project = current_project()?;
	let config = composed_configuration(&project).context("Failed to compose configuration")?;

	for commit_type in allowed_types(&config) {
		println!("{commit_type}");
	}
	Ok(ExitCode::SUCCESS)
}

fn handle_check(commit_type: &str) -> Result<ExitCode> {
	let project = current_project()?;
	let config = composed_configuration(&project).context("Failed to compose configuration")?;

	let verdict = check_type(&config, commit_type);
	debug!(commit_type, ?verdict, "checked commit type");

	match verdict {
		TypeVerdict::Allowed | TypeVerdict::Unrestricted => {
			println!("{commit_type}: allowed");
		}
		TypeVerdict::Rejected { severity } if verdict.passes() => {
			warn!(commit_type, %severity, "commit type is not in the allowed list");
			println!("{commit_type}: allowed with warning");
		}
		TypeVerdict::Rejected { .. } => {
			eprintln!(
				"{commit_type}: not allowed (expected one of: {})",
				allowed_types(&config).join(", ")
			);
			return Ok(ExitCode::FAILURE);
		}
	}

	Ok(ExitCode::SUCCESS)
}

fn handle_config_validate() -> Result<ExitCode> {
	let cwd = std::env::current_dir().context("Failed to get current directory")?;

	let outcome = load_project_config(&cwd)
		.map_err(anyhow::Error::from)
		.and_then(|project| {
			composed_configuration(&project)
				.map(|config| (project, config))
				.map_err(anyhow::Error::from)
		});

	match outcome {
		Ok((project, config)) => {
			match project.path {
				Some(ref path) => println!("Configuration is valid: {}", path.display()),
				None => println!("No configuration files found; using defaults."),
			}
			println!(
				"  extends: {} ({} rules)",
				project.config.extends,
				config.rules.len()
			);
			println!("  output: {}", project.output_path().display());
			Ok(ExitCode::SUCCESS)
		}
		Err(e) => {
			eprintln!("Configuration error: {e:#}");
			Ok(ExitCode::FAILURE)
		}
	}
}
