//! Persistence implementations

pub mod json_notebook_store;

pub use json_notebook_store::JsonNotebookStore;
