//! CLI Adapter.

use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser, Subcommand};

use crate::app::api::{self, InstallReceipt};
use crate::app::config::DEFAULT_BUILDOUT_FILE;
use crate::app::logging::Logging;
use crate::domain::{AppError, TemplateId};

#[derive(Parser)]
#[command(name = "supervisor-recipe")]
#[command(version)]
#[command(
    about = "Generate supervisord, program, and init-script configuration from a buildout file",
    long_about = None
)]
struct Cli {
    /// Buildout file to read
    #[arg(short, long, global = true, default_value = DEFAULT_BUILDOUT_FILE)]
    config: PathBuf,
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Provision directories and the runtime, then write all artifacts
    #[clap(visible_alias = "i")]
    Install {
        /// Parts to install (default: every part)
        parts: Vec<String>,
    },
    /// Rewrite artifacts without provisioning directories or packages
    #[clap(visible_alias = "u")]
    Update {
        /// Parts to update (default: every part)
        parts: Vec<String>,
    },
    /// Print one rendered template without writing it
    Render {
        /// Part name
        part: String,
        /// main-config, program-config, start-stop-script, or control-script
        template: String,
    },
    /// Print the resolved option mapping of a part
    Options {
        /// Part name
        part: String,
        /// Emit JSON instead of `key = value` lines
        #[arg(long)]
        json: bool,
    },
    /// Drop a part; generated files are left in place
    Uninstall {
        /// Part name
        part: String,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    if let Err(e) = Logging::try_init(cli.verbose) {
        eprintln!("Warning: {}", e);
    }

    let config = cli.config.as_path();
    let result: Result<(), AppError> = match cli.command {
        Commands::Install { parts } => run_install(config, &parts, false),
        Commands::Update { parts } => run_install(config, &parts, true),
        Commands::Render { part, template } => run_render(config, &part, &template),
        Commands::Options { part, json } => run_options(config, &part, json),
        Commands::Uninstall { part } => run_uninstall(config, &part),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_install(config: &Path, parts: &[String], update: bool) -> Result<(), AppError> {
    let receipts =
        if update { api::update_at(config, parts)? } else { api::install_at(config, parts)? };

    let verb = if update { "Updated" } else { "Installed" };
    for receipt in &receipts {
        print_receipt(verb, receipt);
    }
    Ok(())
}

fn print_receipt(verb: &str, receipt: &InstallReceipt) {
    println!("✅ {} part '{}' ({} path(s))", verb, receipt.part, receipt.paths.len());
    for path in &receipt.paths {
        println!("  {}", path.display());
    }
}

fn run_render(config: &Path, part: &str, template: &str) -> Result<(), AppError> {
    let template: TemplateId = template.parse()?;
    let text = api::render_at(config, part, template)?;
    print!("{}", text);
    Ok(())
}

fn run_options(config: &Path, part: &str, json: bool) -> Result<(), AppError> {
    let options = api::resolve_options_at(config, part)?;

    if json {
        let text = serde_json::to_string_pretty(&options).map_err(|e| AppError::Parse {
            what: "resolved options".into(),
            details: e.to_string(),
        })?;
        println!("{}", text);
    } else {
        for (key, value) in options.iter() {
            println!("{} = {}", key, value);
        }
    }
    Ok(())
}

fn run_uninstall(config: &Path, part: &str) -> Result<(), AppError> {
    api::uninstall_at(config, part)?;
    println!("✅ Uninstalled part '{}' (generated files kept)", part);
    Ok(())
}
