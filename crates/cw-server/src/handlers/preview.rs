//! Page preview endpoint.

use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;
use cw_renderer::{RenderState, render_with};

use crate::state::AppState;

/// Handle GET /.
///
/// Renders the page for the session's current target section and open
/// dropdown.
pub(crate) async fn get_preview(State(state): State<Arc<AppState>>) -> Html<String> {
    let session = state.session();
    let render_state = RenderState {
        target: session.target(),
        open_menu: session.menu().open_id(),
    };
    Html(render_with(session.document(), &render_state))
}
