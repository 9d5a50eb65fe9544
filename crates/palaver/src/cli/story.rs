//! Story command handlers.

use super::{ReferenceArgs, StepArg};
use palaver::{
    KnownReferences, LineScanCodec, PalaverConfig, PalaverResult, StoryBuilder, StoryError,
    StoryErrorKind,
};
use std::path::Path;
use tracing::{debug, info, warn};

/// Load the CLI configuration, preferring an explicit file over the layered defaults.
pub fn load_config(path: Option<&Path>) -> PalaverResult<PalaverConfig> {
    match path {
        Some(path) => PalaverConfig::from_file(path),
        None => PalaverConfig::load(),
    }
}

/// Scan a definition file and print every diagnostic and skipped line.
///
/// Returns `true` when the story is clean.
pub fn run_lint(
    file: &Path,
    references: &ReferenceArgs,
    config: &PalaverConfig,
) -> PalaverResult<bool> {
    let story = open_story(file, "", "", references, config)?;

    let diagnostics = story.diagnostics();
    for skipped in story.skipped_lines() {
        println!(
            "line {}: skipped '{}' ({})",
            skipped.line_index() + 1,
            skipped.content(),
            skipped.reason()
        );
    }
    for diagnostic in &diagnostics {
        println!("{}", diagnostic);
    }

    let clean = diagnostics.is_empty() && story.skipped_lines().is_empty();
    if clean {
        println!("✓ {} step(s), no problems", story.sequence().len());
    } else {
        info!(
            diagnostics = diagnostics.len(),
            skipped = story.skipped_lines().len(),
            "Lint found problems"
        );
    }
    Ok(clean)
}

/// Build a story from `kind:reference` steps and print its definition.
pub fn run_render(name: &str, steps: &[StepArg]) -> PalaverResult<()> {
    let mut story = StoryBuilder::new();
    story.set_name(name);
    for step in steps {
        story.append(step.kind, step.reference.clone());
    }

    for diagnostic in story.diagnostics() {
        warn!(%diagnostic, "Rendered story has a problem");
    }
    println!("{}", story.definition());
    Ok(())
}

/// Hydrate a definition file and print its submission payload as JSON.
pub fn run_payload(
    file: &Path,
    name: &str,
    description: &str,
    references: &ReferenceArgs,
    config: &PalaverConfig,
) -> PalaverResult<()> {
    let story = open_story(file, name, description, references, config)?;
    let payload = story.submit()?;
    let json = serde_json::to_string_pretty(&payload)
        .map_err(|e| StoryError::new(StoryErrorKind::Export(e.to_string())))?;
    println!("{}", json);
    Ok(())
}

fn open_story(
    file: &Path,
    name: &str,
    description: &str,
    references: &ReferenceArgs,
    config: &PalaverConfig,
) -> PalaverResult<StoryBuilder<LineScanCodec>> {
    debug!(file = %file.display(), "Reading story definition");
    let definition = std::fs::read_to_string(file).map_err(|e| {
        StoryError::new(StoryErrorKind::FileRead(format!(
            "{}: {}",
            file.display(),
            e
        )))
    })?;

    let known = KnownReferences::new(
        references.actions.iter().cloned(),
        references.responses.iter().cloned(),
    );
    Ok(StoryBuilder::hydrate_with(
        LineScanCodec::from(config.parse()),
        name,
        description,
        &definition,
        known,
    ))
}
