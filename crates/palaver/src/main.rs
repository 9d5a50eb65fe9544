//! Palaver CLI binary.
//!
//! Developer harness over the story builder:
//! - Lint story definitions
//! - Render definitions from step lists
//! - Produce submission payloads

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, load_config, run_lint, run_payload, run_render};

    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Lint { file, references } => {
            let clean = run_lint(&file, &references, &config)?;
            if !clean {
                std::process::exit(1);
            }
        }
        Commands::Render { name, steps } => {
            run_render(&name, &steps)?;
        }
        Commands::Payload {
            file,
            name,
            description,
            references,
        } => {
            run_payload(&file, &name, &description, &references, &config)?;
        }
    }

    Ok(())
}
