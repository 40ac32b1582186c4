use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(crate::handlers::matches::list_upcoming))
        .route("/", post(crate::handlers::matches::create_match))
        .route("/completed", get(crate::handlers::matches::list_completed))
        .route("/export", get(crate::handlers::matches::export_matches))
        .route("/import", post(crate::handlers::matches::import_matches))
        .route("/:id", get(crate::handlers::matches::get_match))
        .route("/:id", delete(crate::handlers::matches::delete_match))
        .route("/:id/visibility", patch(crate::handlers::matches::set_visibility))
        .route("/:id/complete", post(crate::handlers::matches::complete_match))
}
