use std::sync::Arc;

use handbook_assets::AssetUploader;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Built once in `main` and cloned per request (inner data is behind `Arc`
/// or is already `Clone`). The pool is closed explicitly on shutdown.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: handbook_db::DbPool,
    /// Hosted storage for defect photos and reports.
    pub assets: Arc<dyn AssetUploader>,
    /// Destination folder passed to every upload.
    pub asset_folder: String,
}
