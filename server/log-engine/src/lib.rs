//! DroidLog segmentation engine — deterministic, rule-based.
//!
//! Scans raw Android log text, flags FATAL / ANR / EXCEPTION / ERROR trigger
//! lines, captures a bounded context window around each, and returns an ordered
//! list of immutable incidents.
//!
//! No AI, no DB, no network; pure computation.

pub mod classify;
pub mod config;
pub mod engine;
pub mod error;
pub mod header;
pub mod sample;
pub mod types;

pub use config::SegmenterConfig;
pub use engine::{segment, Segmenter};
pub use error::EngineError;
pub use types::{Category, Incident, IncidentId};
