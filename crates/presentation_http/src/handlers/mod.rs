//! HTTP request handlers

pub mod health;
pub mod languages;
pub mod notes;
pub mod practice;
pub mod scenario;
pub mod transcribe;
