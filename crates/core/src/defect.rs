//! Defect record field rules.
//!
//! Validation helpers used by the API and repository layers before a defect
//! record is persisted. Required fields are checked for presence only:
//! whitespace-only text is accepted as given.

use serde::Serialize;
use validator::ValidationErrors;

use crate::defect_code::{self, DefectCodeError};
use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// File extensions accepted for defect photos.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// File extensions accepted for the defect report.
pub const REPORT_EXTENSIONS: &[&str] = &["pdf"];

/// Message shown when the minimum set of fields is missing.
pub const REQUIRED_FIELDS_MESSAGE: &str = "model, timestamp and description are required";

// ---------------------------------------------------------------------------
// Attachments
// ---------------------------------------------------------------------------

/// The two kinds of file a defect record can reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AttachmentKind {
    Image,
    Report,
}

impl AttachmentKind {
    pub fn allowed_extensions(self) -> &'static [&'static str] {
        match self {
            Self::Image => IMAGE_EXTENSIONS,
            Self::Report => REPORT_EXTENSIONS,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Report => "PDF report",
        }
    }
}

/// Lowercased extension of `filename`, or an empty string if it has none.
pub fn file_extension(filename: &str) -> String {
    match filename.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => ext.to_lowercase(),
        _ => String::new(),
    }
}

/// Validate that `filename` carries an extension allowed for `kind`.
pub fn validate_attachment(kind: AttachmentKind, filename: &str) -> Result<(), CoreError> {
    let ext = file_extension(filename);
    let allowed = kind.allowed_extensions();
    if allowed.contains(&ext.as_str()) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Unsupported {} file '{filename}'. Allowed extensions: {allowed:?}",
            kind.label()
        )))
    }
}

// ---------------------------------------------------------------------------
// Field validation
// ---------------------------------------------------------------------------

/// Validate the defect date, returning it in canonical `YYYY-MM-DD` form.
pub fn validate_timestamp(timestamp: &str) -> Result<String, CoreError> {
    defect_code::normalize_timestamp(timestamp).map_err(CoreError::from)
}

/// Collapse `validator` field errors into one message.
///
/// Field names are sorted so the message is stable across runs.
pub fn validation_message(errors: &ValidationErrors) -> String {
    let field_errors = errors.field_errors();
    let mut fields: Vec<_> = field_errors.iter().collect();
    fields.sort_by(|a, b| a.0.cmp(b.0));

    let messages: Vec<String> = fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(msg) => msg.to_string(),
                None => format!("{field}: {}", e.code),
            })
        })
        .collect();

    messages.join("; ")
}

impl From<DefectCodeError> for CoreError {
    fn from(err: DefectCodeError) -> Self {
        CoreError::Validation(err.to_string())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
