mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "asset-forms")]
#[command(
    version,
    about = "Validate logistics form records against their schemas",
    long_about = None
)]
struct Cli {
    /// Forms configuration file
    #[arg(short, long, global = true, default_value = asset_forms::config::DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List built-in and configured forms
    Forms,

    /// Validate a JSON record against a form's schema
    Check {
        /// Form name (e.g. register, purchase)
        form: String,

        /// JSON file holding a single object of field values
        #[arg(short, long)]
        record: PathBuf,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Forms => {
            commands::forms::execute(&cli.config)?;
        }
        Commands::Check { form, record, json } => {
            let valid = commands::check::execute(&cli.config, &form, &record, json)?;
            if !valid {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
