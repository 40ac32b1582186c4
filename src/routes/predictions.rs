use axum::{
    routing::{get, post, put},
    Router,
};

use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(crate::handlers::predictions::submit_prediction))
        .route("/user/:user_id", get(crate::handlers::predictions::user_predictions))
        .route("/lock", get(crate::handlers::predictions::get_lock))
        .route("/lock", put(crate::handlers::predictions::set_lock))
}
