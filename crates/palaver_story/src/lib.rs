//! Story definition builder for Palaver.
//!
//! A story is an ordered list of steps (intents, actions, responses) that
//! the chatbot training pipeline consumes as a small YAML block. This crate
//! holds everything an editing form needs to produce one:
//!
//! - **Step sequence**: append, remove and reorder steps
//! - **Validation**: turn grammar diagnostics (intent, then replies)
//! - **Projection**: deterministic definition rendering
//! - **Scanning**: best-effort recovery of steps from a definition
//! - **Drag and drop**: gesture tracking over the step list
//! - **Candidate search**: debounced, last-request-wins catalog lookups
//!
//! # Example
//!
//! ```
//! use palaver_core::StepKind;
//! use palaver_story::{KnownReferences, StoryBuilder};
//!
//! let definition = "- story: greet\n  steps:\n    - intent: [greet]\n    - action: [utter_hi]";
//! let known = KnownReferences::new(Vec::<String>::new(), ["utter_hi"]);
//!
//! let mut story = StoryBuilder::hydrate("Greet", "", definition, known);
//! story.append(StepKind::Intent, "goodbye");
//! story.append(StepKind::Response, "utter_bye");
//!
//! assert!(story.diagnostics().is_empty());
//! let payload = story.submit().unwrap();
//! assert_eq!(payload.responses().len(), 2);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod builder;
mod catalog;
mod codec;
mod drag;
mod parser;
mod projector;
mod search;
mod sequence;
mod settings;
mod validator;

pub use builder::{EditMode, StoryBuilder};
pub use catalog::{InMemoryCatalog, StepCatalog};
pub use codec::{LineScanCodec, StepSequenceCodec};
pub use drag::DragReorder;
pub use parser::{
    KnownReferences, LineScanner, ParseOutcome, SkipReason, SkippedLine, UnknownReference, parse,
    parse_with_report,
};
pub use projector::{FALLBACK_SLUG, project, slugify};
pub use search::{CandidateSearch, SearchOutcome};
pub use sequence::StepSequence;
pub use settings::{PalaverConfig, ParseConfig, SearchConfig, SearchConfigBuilder};
pub use validator::{Diagnostic, diagnostic_messages, validate};
