//! Application layer: services and use cases
//!
//! This layer combines the domain generators with user settings.

pub mod error;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};
pub use services::{SequenceKind, SequenceService};
