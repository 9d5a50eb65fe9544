//! Renders step sequences as story definitions.

use palaver_core::Step;

/// Slug used when a story name normalizes to nothing.
pub const FALLBACK_SLUG: &str = "story_name";

/// Normalizes a story name to a snake_case slug.
///
/// Lowercases, turns whitespace into `_`, drops anything outside
/// `[a-z0-9_]`, collapses runs of `_` and trims them from both ends.
/// Normalizing a slug again returns it unchanged.
///
/// # Examples
///
/// ```
/// use palaver_story::slugify;
///
/// assert_eq!(slugify("  Greet the User! "), "greet_the_user");
/// assert_eq!(slugify("???"), "story_name");
/// ```
pub fn slugify(story_name: &str) -> String {
    let mut slug = String::with_capacity(story_name.len());
    for c in story_name.to_lowercase().chars() {
        let c = if c.is_whitespace() { '_' } else { c };
        if !(c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_') {
            continue;
        }
        if c == '_' && slug.ends_with('_') {
            continue;
        }
        slug.push(c);
    }

    let slug = slug.trim_matches('_');
    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug.to_string()
    }
}

/// Renders a story definition for `steps`.
///
/// Total and deterministic. References are always written in brackets
/// (`- intent: [greet]`), the only form the line scanner recovers. Both
/// actions and responses go under the `action` key.
pub fn project(story_name: &str, steps: &[Step]) -> String {
    let mut lines = vec![format!("- story: {}", slugify(story_name))];
    if !steps.is_empty() {
        lines.push("  steps:".to_string());
        lines.extend(steps.iter().map(|step| {
            format!(
                "    - {}: [{}]",
                step.kind().yaml_key(),
                step.reference_id()
            )
        }));
    }
    lines.join("\n")
}
