//! Core data types for the Palaver story builder.
//!
//! This crate provides the plain data types shared by every Palaver crate.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod candidate;
mod payload;
mod step;

pub use candidate::Candidate;
pub use payload::StoryPayload;
pub use step::{Step, StepId, StepKind};
