//! CLI command definitions.

use clap::{Args, Parser, Subcommand};
use palaver::StepKind;
use std::path::PathBuf;
use std::str::FromStr;

/// Palaver - build, lint and render chatbot story definitions
#[derive(Parser, Debug)]
#[command(name = "palaver")]
#[command(about = "Build, lint and render chatbot story definitions", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file (defaults to bundled, home and ./palaver.toml layers)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan a story definition and report diagnostics and skipped lines
    Lint {
        /// Path to the story definition
        file: PathBuf,

        #[command(flatten)]
        references: ReferenceArgs,
    },

    /// Render a story definition from a list of steps
    Render {
        /// Story name
        #[arg(long)]
        name: String,

        /// Steps as `kind:reference`, e.g. `intent:greet`
        #[arg(long = "step", value_name = "KIND:REFERENCE")]
        steps: Vec<StepArg>,
    },

    /// Print the submission payload for a story definition as JSON
    Payload {
        /// Path to the story definition
        file: PathBuf,

        /// Story name
        #[arg(long)]
        name: String,

        /// Story description
        #[arg(long, default_value = "")]
        description: String,

        #[command(flatten)]
        references: ReferenceArgs,
    },
}

/// Known action and response ids used to classify `action:` lines
#[derive(Args, Debug, Clone, Default)]
pub struct ReferenceArgs {
    /// Known action ids
    #[arg(long, value_delimiter = ',')]
    pub actions: Vec<String>,

    /// Known response ids
    #[arg(long, value_delimiter = ',')]
    pub responses: Vec<String>,
}

/// A `kind:reference` step argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepArg {
    /// Step kind
    pub kind: StepKind,
    /// Referenced entity
    pub reference: String,
}

impl FromStr for StepArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, reference) = s
            .split_once(':')
            .ok_or_else(|| format!("expected KIND:REFERENCE, got '{}'", s))?;
        let kind = match kind.trim().to_lowercase().as_str() {
            "intent" => StepKind::Intent,
            "action" => StepKind::Action,
            "response" => StepKind::Response,
            other => return Err(format!("unknown step kind '{}'", other)),
        };
        let reference = reference.trim();
        if reference.is_empty() {
            return Err("step reference cannot be empty".to_string());
        }
        Ok(Self {
            kind,
            reference: reference.to_string(),
        })
    }
}
