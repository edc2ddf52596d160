//! Hosted asset storage for defect photos and reports.
//!
//! [`AssetUploader`] is the seam the API layer talks to. The production
//! implementation, [`CloudinaryUploader`], posts signed multipart uploads to
//! a Cloudinary-compatible endpoint and returns the public `secure_url`.
//! [`upload_all`] runs a batch of uploads and reports successes and failures
//! separately instead of failing the whole batch.

pub mod batch;
pub mod cloudinary;
pub mod config;
pub mod error;
pub mod uploader;

pub use batch::{upload_all, FailedUpload, UploadReport};
pub use cloudinary::CloudinaryUploader;
pub use config::AssetStoreConfig;
pub use error::UploadError;
pub use uploader::{AssetFile, AssetUploader};
