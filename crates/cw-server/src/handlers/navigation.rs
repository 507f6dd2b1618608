//! Navigation editing endpoints.
//!
//! Every mutating endpoint responds with the full updated item list. Ids
//! that do not exist are reported as 404 and change nothing; out-of-range
//! reorder indices are accepted and leave the order unchanged.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use cw_content::navigation::{self, NavPatch, NavTemplate, NavigationItem};
use cw_site::EditorSession;
use serde::{Deserialize, Serialize};

use crate::error::ServerError;
use crate::state::AppState;

/// Request body for reorder endpoints.
#[derive(Deserialize)]
pub(crate) struct MoveRequest {
    from: usize,
    to: usize,
}

/// Request body for drag endpoints.
#[derive(Deserialize)]
pub(crate) struct DragRequest {
    index: usize,
}

/// Response for menu toggles.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MenuResponse {
    open_id: Option<String>,
}

/// Fill a template from the fields present in `patch`.
fn template(patch: NavPatch, base: NavTemplate) -> NavTemplate {
    NavTemplate {
        label: patch.label.unwrap_or(base.label),
        href: patch.href.unwrap_or(base.href),
        kind: patch.kind.unwrap_or(base.kind),
    }
}

fn require_item(session: &EditorSession, id: &str) -> Result<(), ServerError> {
    if session.document().navigation_items.iter().any(|i| i.id == id) {
        Ok(())
    } else {
        Err(ServerError::ItemNotFound(id.to_owned()))
    }
}

fn require_child(session: &EditorSession, parent: &str, child: &str) -> Result<(), ServerError> {
    let found = session
        .document()
        .navigation_items
        .iter()
        .find(|i| i.id == parent)
        .ok_or_else(|| ServerError::ItemNotFound(parent.to_owned()))?
        .children
        .iter()
        .any(|c| c.id == child);
    if found {
        Ok(())
    } else {
        Err(ServerError::ChildNotFound {
            parent: parent.to_owned(),
            child: child.to_owned(),
        })
    }
}

/// Handle GET /api/navigation.
pub(crate) async fn get_navigation(
    State(state): State<Arc<AppState>>,
) -> Json<Vec<NavigationItem>> {
    Json(state.session().document().navigation_items.clone())
}

/// Handle POST /api/navigation/items.
pub(crate) async fn add_item(
    State(state): State<Arc<AppState>>,
    Json(patch): Json<NavPatch>,
) -> Json<Vec<NavigationItem>> {
    let template = template(patch, NavTemplate::default());
    let mut session = state.session();
    Json(
        session
            .edit_navigation(|items| navigation::add_item(items, Some(template)))
            .to_vec(),
    )
}

/// Handle PATCH /api/navigation/items/{id}.
pub(crate) async fn update_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(patch): Json<NavPatch>,
) -> Result<Json<Vec<NavigationItem>>, ServerError> {
    let mut session = state.session();
    require_item(&session, &id)?;
    Ok(Json(
        session
            .edit_navigation(|items| navigation::update_item(items, &id, &patch))
            .to_vec(),
    ))
}

/// Handle DELETE /api/navigation/items/{id}.
pub(crate) async fn remove_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<NavigationItem>>, ServerError> {
    let mut session = state.session();
    require_item(&session, &id)?;
    Ok(Json(
        session
            .edit_navigation(|items| navigation::remove_item(items, &id))
            .to_vec(),
    ))
}

/// Handle POST /api/navigation/reorder.
pub(crate) async fn reorder(
    State(state): State<Arc<AppState>>,
    Json(request): Json<MoveRequest>,
) -> Json<Vec<NavigationItem>> {
    let mut session = state.session();
    Json(
        session
            .edit_navigation(|items| navigation::reorder(items, request.from, request.to))
            .to_vec(),
    )
}

/// Handle POST /api/navigation/items/{id}/children.
pub(crate) async fn add_child(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(patch): Json<NavPatch>,
) -> Result<Json<Vec<NavigationItem>>, ServerError> {
    let template = template(patch, NavTemplate::child());
    let mut session = state.session();
    require_item(&session, &id)?;
    Ok(Json(
        session
            .edit_navigation(|items| navigation::add_child(items, &id, Some(template)))
            .to_vec(),
    ))
}

/// Handle PATCH /api/navigation/items/{id}/children/{child_id}.
pub(crate) async fn update_child(
    State(state): State<Arc<AppState>>,
    Path((id, child_id)): Path<(String, String)>,
    Json(patch): Json<NavPatch>,
) -> Result<Json<Vec<NavigationItem>>, ServerError> {
    let mut session = state.session();
    require_child(&session, &id, &child_id)?;
    Ok(Json(
        session
            .edit_navigation(|items| navigation::update_child(items, &id, &child_id, &patch))
            .to_vec(),
    ))
}

/// Handle DELETE /api/navigation/items/{id}/children/{child_id}.
pub(crate) async fn remove_child(
    State(state): State<Arc<AppState>>,
    Path((id, child_id)): Path<(String, String)>,
) -> Result<Json<Vec<NavigationItem>>, ServerError> {
    let mut session = state.session();
    require_child(&session, &id, &child_id)?;
    Ok(Json(
        session
            .edit_navigation(|items| navigation::remove_child(items, &id, &child_id))
            .to_vec(),
    ))
}

/// Handle POST /api/navigation/items/{id}/children/reorder.
pub(crate) async fn reorder_children(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(request): Json<MoveRequest>,
) -> Result<Json<Vec<NavigationItem>>, ServerError> {
    let mut session = state.session();
    require_item(&session, &id)?;
    Ok(Json(
        session
            .edit_navigation(|items| {
                navigation::reorder_children(items, &id, request.from, request.to)
            })
            .to_vec(),
    ))
}

/// Handle POST /api/navigation/drag/start.
pub(crate) async fn drag_start(
    State(state): State<Arc<AppState>>,
    Json(request): Json<DragRequest>,
) -> Result<(), ServerError> {
    if !state.session().drag_start(request.index) {
        return Err(ServerError::ItemNotFound(format!("#{}", request.index)));
    }
    Ok(())
}

/// Handle POST /api/navigation/drag/drop.
pub(crate) async fn drag_drop(
    State(state): State<Arc<AppState>>,
    Json(request): Json<DragRequest>,
) -> Result<Json<Vec<NavigationItem>>, ServerError> {
    let mut session = state.session();
    if !session.drag().is_dragging() {
        return Err(ServerError::NotDragging);
    }
    session.drag_drop(request.index);
    Ok(Json(session.document().navigation_items.clone()))
}

/// Handle DELETE /api/navigation/drag.
pub(crate) async fn drag_cancel(State(state): State<Arc<AppState>>) {
    state.session().drag_cancel();
}

/// Handle POST /api/navigation/menu/{id}/toggle.
pub(crate) async fn toggle_menu(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<MenuResponse>, ServerError> {
    let mut session = state.session();
    require_item(&session, &id)?;
    session.toggle_menu(&id);
    Ok(Json(MenuResponse {
        open_id: session.menu().open_id().map(str::to_owned),
    }))
}

/// Handle DELETE /api/navigation/menu.
pub(crate) async fn close_menu(State(state): State<Arc<AppState>>) -> Json<MenuResponse> {
    state.session().close_menu();
    Json(MenuResponse { open_id: None })
}
