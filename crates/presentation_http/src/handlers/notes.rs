//! Notebook listing handlers

use axum::{
    Json,
    extract::{Path, State},
};
use application::ApplicationError;
use domain::{DomainError, EntryId, NotebookEntry};
use serde::Serialize;
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

/// Notebook listing response
#[derive(Debug, Serialize)]
pub struct NotesResponse {
    /// Entries, newest first
    pub notes: Vec<NotebookEntry>,
    /// Number of entries
    pub count: usize,
}

/// List all notebook entries, newest first
#[instrument(skip(state))]
pub async fn list_notes(State(state): State<AppState>) -> Result<Json<NotesResponse>, ApiError> {
    let mut notes = state.store.list_all().await?;
    notes.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

    let count = notes.len();
    Ok(Json(NotesResponse { notes, count }))
}

/// Fetch one notebook entry by id
#[instrument(skip(state))]
pub async fn get_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<NotebookEntry>, ApiError> {
    // An unparseable id can't name a stored note, so it reads as absent too
    let entry_id = EntryId::parse(&id)
        .map_err(|_| ApplicationError::from(DomainError::not_found("Note", id.as_str())))?;

    let entry = state
        .store
        .get(&entry_id)
        .await?
        .ok_or_else(|| ApplicationError::from(DomainError::not_found("Note", id.as_str())))?;

    Ok(Json(entry))
}
