//! DroidLog remote annotator — explains one incident with a hosted model.
//!
//! The caller owns scheduling, timeouts around the whole call, and what to do
//! with the outcome. Nothing here keeps state between calls.

pub mod client;
pub mod config;
pub mod error;
pub mod prompt;

pub use client::{Annotate, GeminiAnnotator};
pub use config::AnnotatorConfig;
pub use error::AnnotateError;
