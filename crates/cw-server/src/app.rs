//! Router construction.
//!
//! Builds the axum router with all routes and middleware.

use std::sync::Arc;

use axum::Router;
use axum::routing::{delete, get, patch, post, put};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::handlers::{content, editor, navigation, preview};
use crate::middleware::security;
use crate::state::AppState;

/// Create the application router.
pub(crate) fn create_router(state: Arc<AppState>) -> Router {
    let content_routes = Router::new()
        .route("/api/content", get(content::get_content))
        .route("/api/content/save", post(content::save))
        .route("/api/content/reset", post(content::reset))
        .route("/api/content/reload", post(content::reload))
        .route("/api/content/lists/{list}", post(content::add_list_item))
        .route(
            "/api/content/lists/{list}/{id}",
            delete(content::remove_list_item),
        )
        .route("/api/content/{field}", put(content::put_field));

    let navigation_routes = Router::new()
        .route("/api/navigation", get(navigation::get_navigation))
        .route("/api/navigation/items", post(navigation::add_item))
        .route(
            "/api/navigation/items/{id}",
            patch(navigation::update_item).delete(navigation::remove_item),
        )
        .route("/api/navigation/reorder", post(navigation::reorder))
        .route(
            "/api/navigation/items/{id}/children",
            post(navigation::add_child),
        )
        .route(
            "/api/navigation/items/{id}/children/reorder",
            post(navigation::reorder_children),
        )
        .route(
            "/api/navigation/items/{id}/children/{child_id}",
            patch(navigation::update_child).delete(navigation::remove_child),
        )
        .route("/api/navigation/drag", delete(navigation::drag_cancel))
        .route("/api/navigation/drag/start", post(navigation::drag_start))
        .route("/api/navigation/drag/drop", post(navigation::drag_drop))
        .route("/api/navigation/menu", delete(navigation::close_menu))
        .route(
            "/api/navigation/menu/{id}/toggle",
            post(navigation::toggle_menu),
        );

    let editor_routes = Router::new()
        .route("/api/editor", get(editor::get_editor))
        .route("/api/editor/sections", delete(editor::close_editor))
        .route("/api/editor/sections/{section}", post(editor::request_edit))
        .route("/api/editor/tab/{tab}", put(editor::set_tab));

    Router::new()
        .route("/", get(preview::get_preview))
        .merge(content_routes)
        .merge(navigation_routes)
        .merge(editor_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(security::csp_layer())
                .layer(security::content_type_options_layer())
                .layer(security::frame_options_layer()),
        )
        .with_state(state)
}
