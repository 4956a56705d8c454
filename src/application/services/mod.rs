//! Application services

pub mod sequence;

pub use sequence::{SequenceKind, SequenceService};
