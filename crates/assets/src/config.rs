/// Default destination folder inside the asset store.
pub const DEFAULT_FOLDER: &str = "handbook_reports";

/// Default base URL of the upload API.
pub const DEFAULT_API_BASE: &str = "https://api.cloudinary.com/v1_1";

/// Default per-upload HTTP timeout in seconds.
pub const DEFAULT_UPLOAD_TIMEOUT_SECS: u64 = 60;

/// Asset store credentials and endpoint, loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AssetStoreConfig {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
    /// Destination folder for every upload.
    pub folder: String,
    /// Base URL; the cloud name and resource path are appended.
    pub api_base: String,
    pub upload_timeout_secs: u64,
}

/// A required asset store variable is missing or malformed.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct AssetConfigError(String);

impl AssetStoreConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var                     | Default                            |
    /// |-----------------------------|------------------------------------|
    /// | `ASSET_CLOUD_NAME`          | required                           |
    /// | `ASSET_API_KEY`             | required                           |
    /// | `ASSET_API_SECRET`          | required                           |
    /// | `ASSET_FOLDER`              | `handbook_reports`                 |
    /// | `ASSET_API_BASE`            | `https://api.cloudinary.com/v1_1`  |
    /// | `ASSET_UPLOAD_TIMEOUT_SECS` | `60`                               |
    pub fn from_env() -> Result<Self, AssetConfigError> {
        let upload_timeout_secs = match std::env::var("ASSET_UPLOAD_TIMEOUT_SECS") {
            Ok(raw) => raw.parse().map_err(|_| {
                AssetConfigError("ASSET_UPLOAD_TIMEOUT_SECS must be a valid u64".into())
            })?,
            Err(_) => DEFAULT_UPLOAD_TIMEOUT_SECS,
        };

        Ok(Self {
            cloud_name: required("ASSET_CLOUD_NAME")?,
            api_key: required("ASSET_API_KEY")?,
            api_secret: required("ASSET_API_SECRET")?,
            folder: std::env::var("ASSET_FOLDER").unwrap_or_else(|_| DEFAULT_FOLDER.into()),
            api_base: std::env::var("ASSET_API_BASE")
                .unwrap_or_else(|_| DEFAULT_API_BASE.into())
                .trim_end_matches('/')
                .to_string(),
            upload_timeout_secs,
        })
    }
}

fn required(name: &str) -> Result<String, AssetConfigError> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(AssetConfigError(format!("{name} must be set"))),
    }
}
