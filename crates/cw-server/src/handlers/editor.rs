//! Editor panel endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use cw_content::{EditorTab, SectionId};
use cw_renderer::EditorPanel;

use crate::error::ServerError;
use crate::state::AppState;

fn panel(state: &AppState) -> EditorPanel {
    let session = state.session();
    EditorPanel::new(session.document(), session.target(), session.tab())
}

/// Handle GET /api/editor.
pub(crate) async fn get_editor(State(state): State<Arc<AppState>>) -> Json<EditorPanel> {
    Json(panel(&state))
}

/// Handle POST /api/editor/sections/{section}.
///
/// Opens the editor on the section with the Content tab active.
pub(crate) async fn request_edit(
    State(state): State<Arc<AppState>>,
    Path(section): Path<String>,
) -> Result<Json<EditorPanel>, ServerError> {
    let section: SectionId = section.parse()?;
    state.session().request_edit(section);
    Ok(Json(panel(&state)))
}

/// Handle DELETE /api/editor/sections.
pub(crate) async fn close_editor(State(state): State<Arc<AppState>>) -> Json<EditorPanel> {
    state.session().close_editor();
    Json(panel(&state))
}

/// Handle PUT /api/editor/tab/{tab}.
pub(crate) async fn set_tab(
    State(state): State<Arc<AppState>>,
    Path(tab): Path<String>,
) -> Result<Json<EditorPanel>, ServerError> {
    let tab: EditorTab = tab.parse()?;
    state.session().set_tab(tab);
    Ok(Json(panel(&state)))
}
