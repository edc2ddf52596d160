/// Errors from a single asset upload.
#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The asset store returned a non-2xx status code.
    #[error("Asset store error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The asset store accepted the upload but returned no public URL.
    #[error("Asset store response did not include a secure_url")]
    MissingUrl,
}
