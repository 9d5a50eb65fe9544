//! Command-line interface module.

mod commands;
mod story;

pub use commands::{Cli, Commands, ReferenceArgs, StepArg};
pub use story::{load_config, run_lint, run_payload, run_render};
