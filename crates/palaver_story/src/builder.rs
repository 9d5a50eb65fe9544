//! Story editing session.

use crate::{
    Diagnostic, DragReorder, KnownReferences, LineScanCodec, SkippedLine, StepCatalog,
    StepSequence, StepSequenceCodec,
};
use palaver_core::{Candidate, StepId, StepKind, StoryPayload};
use palaver_error::{PalaverResult, StoryError, StoryErrorKind};
use tracing::{debug, info, instrument};

/// How the story is being edited.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, derive_more::Display)]
pub enum EditMode {
    /// Steps are edited through the structured list
    #[default]
    #[display("structured")]
    Structured,
    /// The definition text is edited directly
    #[display("expert")]
    Expert,
}

/// State of one story create/edit form.
///
/// In structured mode the step list is authoritative and the definition is
/// rendered from it. In expert mode the raw definition text is
/// authoritative; the step list is re-scanned from it after every edit so
/// the list view and diagnostics stay in sync.
///
/// # Examples
///
/// ```
/// use palaver_core::StepKind;
/// use palaver_story::StoryBuilder;
///
/// let mut story = StoryBuilder::new();
/// story.set_name("Greet user");
/// story.append(StepKind::Intent, "greet");
/// story.append(StepKind::Action, "action_hello");
///
/// let payload = story.submit().unwrap();
/// assert_eq!(payload.intents(), &vec!["greet".to_string()]);
/// assert!(payload.define().starts_with("- story: greet_user"));
/// ```
#[derive(Debug, Clone)]
pub struct StoryBuilder<C = LineScanCodec> {
    name: String,
    description: String,
    sequence: StepSequence,
    mode: EditMode,
    raw_definition: String,
    known: KnownReferences,
    skipped: Vec<SkippedLine>,
    drag: DragReorder,
    codec: C,
}

impl StoryBuilder<LineScanCodec> {
    /// Starts an empty story.
    pub fn new() -> Self {
        Self::with_codec(LineScanCodec::default())
    }

    /// Opens an existing story for editing.
    pub fn hydrate(
        name: impl Into<String>,
        description: impl Into<String>,
        definition: &str,
        known: KnownReferences,
    ) -> Self {
        Self::hydrate_with(LineScanCodec::default(), name, description, definition, known)
    }
}

impl Default for StoryBuilder<LineScanCodec> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: StepSequenceCodec> StoryBuilder<C> {
    /// Starts an empty story using `codec` for definitions.
    pub fn with_codec(codec: C) -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            sequence: StepSequence::new(),
            mode: EditMode::Structured,
            raw_definition: String::new(),
            known: KnownReferences::default(),
            skipped: Vec::new(),
            drag: DragReorder::default(),
            codec,
        }
    }

    /// Opens an existing story using `codec` for definitions.
    #[instrument(skip(codec, name, description, definition, known), fields(definition_len = definition.len()))]
    pub fn hydrate_with(
        codec: C,
        name: impl Into<String>,
        description: impl Into<String>,
        definition: &str,
        known: KnownReferences,
    ) -> Self {
        let mut builder = Self::with_codec(codec);
        builder.name = name.into();
        builder.description = description.into();
        builder.known = known;
        builder.rescan(definition);
        info!(
            name = %builder.name,
            steps = builder.sequence.len(),
            skipped = builder.skipped.len(),
            "Hydrated story"
        );
        builder
    }

    /// Story name as entered.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sets the story name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Story description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Sets the story description.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Current step list.
    pub fn sequence(&self) -> &StepSequence {
        &self.sequence
    }

    /// Current edit mode.
    pub fn mode(&self) -> EditMode {
        self.mode
    }

    /// Action and response ids used to disambiguate definitions.
    pub fn known(&self) -> &KnownReferences {
        &self.known
    }

    /// Marked lines skipped by the most recent scan.
    pub fn skipped_lines(&self) -> &[SkippedLine] {
        &self.skipped
    }

    /// Drag gesture state.
    pub fn drag(&self) -> &DragReorder {
        &self.drag
    }

    /// Records candidates as known references.
    pub fn register_candidates<'a>(&mut self, candidates: impl IntoIterator<Item = &'a Candidate>) {
        for candidate in candidates {
            self.known
                .insert(*candidate.kind(), candidate.reference_id().clone());
        }
    }

    /// Appends a step. Ignored in expert mode.
    pub fn append(&mut self, kind: StepKind, reference: impl Into<String>) -> Option<StepId> {
        if !self.structured() {
            return None;
        }
        let reference = reference.into();
        self.known.insert(kind, reference.clone());
        Some(self.sequence.append(kind, reference).id().clone())
    }

    /// Appends a step picked from the catalog. Ignored in expert mode.
    pub fn append_candidate(&mut self, candidate: &Candidate) -> Option<StepId> {
        if !self.structured() {
            return None;
        }
        self.known
            .insert(*candidate.kind(), candidate.reference_id().clone());
        Some(self.sequence.append_candidate(candidate).id().clone())
    }

    /// Removes a step by id. Ignored in expert mode or when absent.
    pub fn remove(&mut self, id: &StepId) -> bool {
        self.structured() && self.sequence.remove_by_id(id).is_some()
    }

    /// Moves a step. Ignored in expert mode.
    pub fn reorder(&mut self, from: usize, to: usize) -> bool {
        self.structured() && self.sequence.reorder(from, to)
    }

    /// Starts dragging the step at `index`. Ignored in expert mode.
    pub fn start_drag(&mut self, index: usize) {
        if self.structured() {
            self.drag.start(index);
        }
    }

    /// Updates the hovered drop zone. Ignored in expert mode.
    pub fn hover_drag(&mut self, index: usize) {
        if self.structured() {
            self.drag.hover(index);
        }
    }

    /// Drops the dragged step before `index`. Ignored in expert mode.
    pub fn drop_drag(&mut self, index: usize) -> bool {
        self.structured() && self.drag.drop_on(&mut self.sequence, index)
    }

    /// Drops the dragged step at the hovered drop zone, or cancels. Ignored
    /// in expert mode.
    pub fn drop_drag_on_hint(&mut self) -> bool {
        self.structured() && self.drag.drop_on_hint(&mut self.sequence)
    }

    /// Abandons the drag gesture.
    pub fn cancel_drag(&mut self) {
        self.drag.cancel();
    }

    /// Switches between structured and expert editing.
    ///
    /// Entering expert mode seeds the text with the rendered definition.
    /// Leaving it rebuilds the step list from the text.
    #[instrument(skip(self), fields(mode = %self.mode))]
    pub fn set_expert_mode(&mut self, expert: bool) {
        match (self.mode, expert) {
            (EditMode::Structured, true) => {
                self.drag.cancel();
                self.raw_definition = self.codec.encode(&self.name, &self.sequence);
                self.mode = EditMode::Expert;
            }
            (EditMode::Expert, false) => {
                let text = std::mem::take(&mut self.raw_definition);
                self.rescan(&text);
                self.mode = EditMode::Structured;
            }
            _ => return,
        }
        debug!(mode = %self.mode, steps = self.sequence.len(), "Switched edit mode");
    }

    /// Replaces the definition text. Ignored outside expert mode.
    pub fn edit_raw(&mut self, text: impl Into<String>) {
        if self.mode != EditMode::Expert {
            debug!("Ignoring raw edit in structured mode");
            return;
        }
        self.raw_definition = text.into();
        let text = self.raw_definition.clone();
        self.rescan(&text);
    }

    /// The story definition as it would be submitted.
    pub fn definition(&self) -> String {
        match self.mode {
            EditMode::Structured => self.codec.encode(&self.name, &self.sequence),
            EditMode::Expert => self.raw_definition.clone(),
        }
    }

    /// Grammar problems in the current step list.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.sequence.validate()
    }

    /// Fills in display names from the catalog.
    ///
    /// Names are applied only once every lookup has succeeded; on error the
    /// step list is left exactly as it was.
    ///
    /// # Errors
    ///
    /// Returns the first catalog error encountered.
    #[instrument(skip(self, catalog), fields(steps = self.sequence.len()))]
    pub async fn resolve_display_names<K>(&mut self, catalog: &K) -> PalaverResult<()>
    where
        K: StepCatalog + ?Sized,
    {
        let mut names = Vec::with_capacity(self.sequence.len());
        for step in self.sequence.iter() {
            names.push(catalog.display_name(*step.kind(), step.reference_id()).await?);
        }

        let mut resolved = 0;
        for (step, name) in self.sequence.steps_mut().iter_mut().zip(names) {
            if let Some(name) = name {
                step.set_display_name(name);
                resolved += 1;
            }
        }
        debug!(resolved, "Resolved display names");
        Ok(())
    }

    /// Builds the payload for the story storage backend.
    ///
    /// # Errors
    ///
    /// Fails if the name is blank or the validator reports any problem.
    #[instrument(skip(self), fields(name = %self.name, mode = %self.mode))]
    pub fn submit(&self) -> PalaverResult<StoryPayload> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(StoryError::new(StoryErrorKind::EmptyName).into());
        }

        let diagnostics = self.diagnostics();
        if !diagnostics.is_empty() {
            debug!(?diagnostics, "Submission blocked");
            return Err(StoryError::new(StoryErrorKind::InvalidSequence {
                count: diagnostics.len(),
            })
            .into());
        }

        let payload = StoryPayload::from_steps(
            name,
            self.description.trim(),
            self.definition(),
            self.sequence.steps(),
        );
        info!(steps = self.sequence.len(), "Story ready for submission");
        Ok(payload)
    }

    fn structured(&self) -> bool {
        if self.mode == EditMode::Expert {
            debug!("Ignoring structured edit in expert mode");
            return false;
        }
        true
    }

    /// Rebuilds the step list from `text`, keeping display names already
    /// resolved for the same references.
    fn rescan(&mut self, text: &str) {
        let (mut sequence, skipped) = self.codec.decode(text, &self.known).into_parts();
        for step in sequence.steps_mut() {
            let previous = self
                .sequence
                .iter()
                .find(|old| old.kind() == step.kind() && old.reference_id() == step.reference_id());
            if let Some(previous) = previous {
                step.set_display_name(previous.display_name().clone());
            }
        }
        self.sequence = sequence;
        self.skipped = skipped;
    }
}
