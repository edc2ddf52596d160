use axum::routing::get;
use axum::Router;

use crate::handlers::procedures;
use crate::state::AppState;

/// Static reference content, mounted at `/procedures`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(procedures::get_procedure))
}
