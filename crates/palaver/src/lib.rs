//! Palaver - story definition builder for chatbot administration consoles.
//!
//! Operators compose stories (an intent, then the bot's actions and
//! responses, turn after turn) and Palaver keeps the step list, its
//! diagnostics and the generated definition consistent.
//!
//! # Quick Start
//!
//! ```
//! use palaver::{StepKind, StoryBuilder};
//!
//! let mut story = StoryBuilder::new();
//! story.set_name("Check balance");
//! story.append(StepKind::Intent, "check_balance");
//! story.append(StepKind::Action, "action_fetch_balance");
//! story.append(StepKind::Response, "utter_balance");
//!
//! assert!(story.diagnostics().is_empty());
//! println!("{}", story.definition());
//! ```
//!
//! # Architecture
//!
//! - `palaver_error` - Error types
//! - `palaver_core` - Core data types (Step, StepKind, StoryPayload)
//! - `palaver_story` - Step sequence, validation, definition codec, search
//!
//! This crate re-exports everything for convenience.

pub use palaver_core::*;
pub use palaver_error::*;
pub use palaver_story::*;
