pub mod defects;
pub mod health;
pub mod procedures;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /defects                     create (multipart POST), list by model (GET)
/// /defects/code-preview        preview a generated code
/// /defects/{code}              detail by exact code
///
/// /procedures                  static defect-handling procedure
/// ```
pub fn api_routes(max_upload_bytes: usize) -> Router<AppState> {
    Router::new()
        .nest("/defects", defects::router(max_upload_bytes))
        .nest("/procedures", procedures::router())
}
