use async_trait::async_trait;

use crate::error::UploadError;

/// A file waiting to be sent to the asset store.
#[derive(Debug, Clone)]
pub struct AssetFile {
    /// Original file name, used for logging and as the upload part name.
    pub file_name: String,
    /// Raw file content.
    pub bytes: Vec<u8>,
}

impl AssetFile {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }
}

/// Uploads one file to hosted storage and returns its public URL.
///
/// Implementations must not retry; the caller decides what a failure means.
#[async_trait]
pub trait AssetUploader: Send + Sync {
    async fn upload(&self, file: &AssetFile, folder: &str) -> Result<String, UploadError>;
}
