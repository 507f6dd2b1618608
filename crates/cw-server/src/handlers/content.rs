//! Content document endpoints.
//!
//! Field writes persist immediately. `save` forces a write and reports the
//! outcome as a [`SaveNotice`].

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use cw_content::lists::KeyedList;
use cw_content::{ContentDocument, FieldUpdate};
use cw_site::SaveNotice;
use serde_json::Value;

use crate::error::ServerError;
use crate::state::AppState;

/// Handle GET /api/content.
pub(crate) async fn get_content(State(state): State<Arc<AppState>>) -> Json<ContentDocument> {
    Json(state.session().document().clone())
}

/// Handle PUT /api/content/{field}.
///
/// The body is the complete new value of the field.
pub(crate) async fn put_field(
    State(state): State<Arc<AppState>>,
    Path(field): Path<String>,
    Json(value): Json<Value>,
) -> Result<Json<ContentDocument>, ServerError> {
    let update = FieldUpdate::from_json(&field, value)?;
    Ok(Json(state.session().update(update).clone()))
}

/// Handle POST /api/content/save.
pub(crate) async fn save(State(state): State<Arc<AppState>>) -> (StatusCode, Json<SaveNotice>) {
    let notice = state.session().save();
    let status = match notice {
        SaveNotice::Saved => StatusCode::OK,
        SaveNotice::Failed(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(notice))
}

/// Handle POST /api/content/reset.
pub(crate) async fn reset(State(state): State<Arc<AppState>>) -> Json<ContentDocument> {
    Json(state.session().reset().clone())
}

/// Handle POST /api/content/reload.
pub(crate) async fn reload(State(state): State<Arc<AppState>>) -> Json<ContentDocument> {
    Json(state.session().reload().clone())
}

/// Handle POST /api/content/lists/{list}.
pub(crate) async fn add_list_item(
    State(state): State<Arc<AppState>>,
    Path(list): Path<String>,
) -> Result<Json<ContentDocument>, ServerError> {
    let list: KeyedList = list.parse()?;
    Ok(Json(state.session().add_list_item(list).clone()))
}

/// Handle DELETE /api/content/lists/{list}/{id}.
pub(crate) async fn remove_list_item(
    State(state): State<Arc<AppState>>,
    Path((list, id)): Path<(String, String)>,
) -> Result<Json<ContentDocument>, ServerError> {
    let list: KeyedList = list.parse()?;
    Ok(Json(state.session().remove_list_item(list, &id).clone()))
}
