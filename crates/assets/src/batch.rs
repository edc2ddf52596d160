//! Batch uploads with explicit partial-failure reporting.

use serde::Serialize;

use crate::uploader::{AssetFile, AssetUploader};

/// A file the asset store did not accept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedUpload {
    pub file_name: String,
    pub reason: String,
}

/// Outcome of a batch upload.
///
/// `urls` keeps submission order of the files that succeeded. A failed file
/// is listed in `failed` and leaves no gap in `urls`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UploadReport {
    pub urls: Vec<String>,
    pub failed: Vec<FailedUpload>,
}

impl UploadReport {
    /// First successful URL, or `""` when nothing was uploaded.
    pub fn first_url_or_empty(&self) -> String {
        self.urls.first().cloned().unwrap_or_default()
    }
}

/// Upload `files` one at a time, in order.
///
/// Failures are logged and collected; they never abort the batch.
pub async fn upload_all(
    uploader: &dyn AssetUploader,
    files: &[AssetFile],
    folder: &str,
) -> UploadReport {
    let mut report = UploadReport::default();

    for file in files {
        match uploader.upload(file, folder).await {
            Ok(url) => report.urls.push(url),
            Err(e) => {
                tracing::warn!(file = %file.file_name, error = %e, "Asset upload failed, skipping file");
                report.failed.push(FailedUpload {
                    file_name: file.file_name.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    if !files.is_empty() {
        tracing::info!(
            uploaded = report.urls.len(),
            failed = report.failed.len(),
            "Asset batch finished",
        );
    }

    report
}
