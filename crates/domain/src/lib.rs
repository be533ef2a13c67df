//! Domain layer for LinguaLog
//!
//! Contains core business entities, value objects, and domain errors.
//! This layer has no I/O dependencies and defines the ubiquitous language.

pub mod entities;
pub mod errors;
pub mod value_objects;

// Re-export the language table for convenient access
pub use value_objects::language;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
