//! Defect record entity model and DTOs.

use handbook_core::defect::{self, REQUIRED_FIELDS_MESSAGE};
use handbook_core::error::CoreError;
use handbook_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationError};

/// A full row from the `defect_records` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DefectRecord {
    pub id: DbId,
    pub model: String,
    pub error_code: String,
    pub description: String,
    pub root_cause: String,
    pub short_term_action: String,
    pub long_term_action: String,
    pub timestamp: String,
    pub images: Vec<String>,
    pub pdf_report: String,
    pub created_at: Timestamp,
}

impl DefectRecord {
    /// Drop the store-assigned fields for presentation.
    pub fn into_detail(self) -> DefectDetail {
        DefectDetail {
            model: self.model,
            error_code: self.error_code,
            description: self.description,
            root_cause: self.root_cause,
            short_term_action: self.short_term_action,
            long_term_action: self.long_term_action,
            timestamp: self.timestamp,
            images: self.images,
            pdf_report: self.pdf_report,
        }
    }
}

/// A single defect as shown in the detail view (no internal id).
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct DefectDetail {
    pub model: String,
    pub error_code: String,
    pub description: String,
    pub root_cause: String,
    pub short_term_action: String,
    pub long_term_action: String,
    pub timestamp: String,
    pub images: Vec<String>,
    pub pdf_report: String,
}

/// A listing row for lookup by model. Attachment columns are omitted.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct DefectSummary {
    pub model: String,
    pub error_code: String,
    pub description: String,
    pub root_cause: String,
    pub short_term_action: String,
    pub long_term_action: String,
    pub timestamp: String,
}

/// DTO for inserting a defect record.
///
/// `model`, `error_code` and `description` must be non-empty; whitespace is
/// not trimmed. Optional text fields default to `""`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateDefectRecord {
    #[validate(length(min = 1, message = "model is required"))]
    pub model: String,
    #[validate(length(min = 1, message = "error_code is required"))]
    pub error_code: String,
    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,
    #[serde(default)]
    pub root_cause: String,
    #[serde(default)]
    pub short_term_action: String,
    #[serde(default)]
    pub long_term_action: String,
    #[validate(custom(function = "validate_iso_date"))]
    pub timestamp: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub pdf_report: String,
}

impl CreateDefectRecord {
    /// Run the acceptance gate applied before any insert.
    pub fn check(&self) -> Result<(), CoreError> {
        if let Err(errors) = self.validate() {
            return Err(CoreError::Validation(format!(
                "{REQUIRED_FIELDS_MESSAGE} ({})",
                defect::validation_message(&errors)
            )));
        }
        Ok(())
    }
}

/// Only the canonical zero-padded form may be stored.
fn validate_iso_date(value: &str) -> Result<(), ValidationError> {
    match defect::validate_timestamp(value) {
        Ok(canonical) if canonical == value => Ok(()),
        _ => Err(ValidationError::new("iso_date")
            .with_message("timestamp must be YYYY-MM-DD".into())),
    }
}

/// Query parameters for listing defects by model.
///
/// A missing `model` is treated as the empty model, which matches nothing.
#[derive(Debug, Deserialize)]
pub struct DefectListParams {
    #[serde(default)]
    pub model: String,
}
