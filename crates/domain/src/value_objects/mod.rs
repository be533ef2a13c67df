//! Value Objects - Immutable, identity-less domain primitives

mod entry_id;
pub mod language;

pub use entry_id::EntryId;
