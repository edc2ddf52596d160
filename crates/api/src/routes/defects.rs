//! Route definitions for defect records.
//!
//! Mounted at `/defects` by `api_routes()`.

use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::Router;

use crate::handlers::defects;
use crate::state::AppState;

/// Defect routes.
///
/// ```text
/// POST   /                  -> create_defect (multipart)
/// GET    /?model=           -> list_by_model
/// GET    /code-preview      -> preview_code
/// GET    /{code}            -> get_by_code
/// ```
pub fn router(max_upload_bytes: usize) -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(defects::list_by_model).post(defects::create_defect),
        )
        .route("/code-preview", get(defects::preview_code))
        .route("/{code}", get(defects::get_by_code))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
}
