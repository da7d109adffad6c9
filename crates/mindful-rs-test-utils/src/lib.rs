//! Test helpers shared across Mindful crates.

pub mod completion;

pub use completion::{FailingCompletion, FixedCompletion, GatedCompletion, RecordingCompletion};
