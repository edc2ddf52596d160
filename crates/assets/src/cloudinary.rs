//! Signed uploads to a Cloudinary-compatible asset store.
//!
//! Each upload is a `POST {api_base}/{cloud_name}/auto/upload` multipart
//! request. `auto` lets the store classify images and PDFs itself. The
//! request is signed with SHA-256 over the sorted signed parameters followed
//! by the API secret.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use sha2::{Digest, Sha256};

use crate::config::AssetStoreConfig;
use crate::error::UploadError;
use crate::uploader::{AssetFile, AssetUploader};

/// Resource type sent in the upload path.
const RESOURCE_TYPE: &str = "auto";

/// Delivery type; `upload` assets are publicly reachable.
const DELIVERY_TYPE: &str = "upload";

const SIGNATURE_ALGORITHM: &str = "sha256";

/// Subset of the upload response we care about.
#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: Option<String>,
}

/// HTTP uploader for a single asset store account.
pub struct CloudinaryUploader {
    client: reqwest::Client,
    config: AssetStoreConfig,
}

impl CloudinaryUploader {
    /// Create an uploader with its own HTTP client.
    pub fn new(config: AssetStoreConfig) -> Result<Self, UploadError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.upload_timeout_secs))
            .build()?;
        Ok(Self { client, config })
    }

    fn upload_url(&self) -> String {
        format!(
            "{}/{}/{RESOURCE_TYPE}/upload",
            self.config.api_base, self.config.cloud_name
        )
    }

    /// Ensure the response has a success status code.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, UploadError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(UploadError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl AssetUploader for CloudinaryUploader {
    async fn upload(&self, file: &AssetFile, folder: &str) -> Result<String, UploadError> {
        let timestamp = chrono::Utc::now().timestamp().to_string();
        let signature = sign_params(
            &[
                ("folder", folder),
                ("timestamp", &timestamp),
                ("type", DELIVERY_TYPE),
            ],
            &self.config.api_secret,
        );

        let part = Part::bytes(file.bytes.clone()).file_name(file.file_name.clone());
        let form = Form::new()
            .part("file", part)
            .text("api_key", self.config.api_key.clone())
            .text("timestamp", timestamp)
            .text("folder", folder.to_string())
            .text("type", DELIVERY_TYPE)
            .text("signature", signature)
            .text("signature_algorithm", SIGNATURE_ALGORITHM);

        let response = self
            .client
            .post(self.upload_url())
            .multipart(form)
            .send()
            .await?;
        let response = Self::ensure_success(response).await?;
        let body: UploadResponse = response.json().await?;

        let url = body.secure_url.ok_or(UploadError::MissingUrl)?;
        tracing::debug!(file = %file.file_name, %url, "Asset uploaded");
        Ok(url)
    }
}

/// Compute the request signature.
///
/// Parameters are sorted by name, joined as `k=v` pairs with `&`, the secret
/// is appended, and the result is hashed with SHA-256 (lowercase hex).
pub fn sign_params(params: &[(&str, &str)], api_secret: &str) -> String {
    let mut sorted: Vec<_> = params.iter().filter(|(_, v)| !v.is_empty()).collect();
    sorted.sort_by(|a, b| a.0.cmp(b.0));

    let to_sign = sorted
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");

    let hash = Sha256::digest(format!("{to_sign}{api_secret}").as_bytes());
    format!("{hash:x}")
}
