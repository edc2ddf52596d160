//! Handlers for logging and looking up defect records.
//!
//! Records are created from a multipart form: text fields plus any number
//! of `images` file parts and at most one `pdf_report` file part. Uploads to
//! the asset store are best-effort: a file the store rejects is dropped from
//! the record and listed in the response's upload report.

use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use handbook_assets::{upload_all, AssetFile, UploadReport};
use handbook_core::defect::{self, AttachmentKind};
use handbook_core::defect_code::{self, DefectCode};
use handbook_core::error::CoreError;
use handbook_db::models::defect_record::{CreateDefectRecord, DefectDetail, DefectListParams};
use handbook_db::repositories::DefectRecordRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Fresh codes tried before accepting one that already exists.
const MAX_CODE_ATTEMPTS: usize = 5;

// ---------------------------------------------------------------------------
// Form parsing
// ---------------------------------------------------------------------------

/// Parsed multipart form for a new defect.
#[derive(Debug, Default)]
struct DefectForm {
    model: String,
    timestamp: String,
    description: String,
    root_cause: String,
    short_term_action: String,
    long_term_action: String,
    images: Vec<AssetFile>,
    pdf_report: Option<AssetFile>,
}

impl DefectForm {
    async fn from_multipart(multipart: &mut Multipart) -> AppResult<Self> {
        let mut form = Self::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?
        {
            let name = field.name().unwrap_or("").to_string();
            match name.as_str() {
                "images" | "pdf_report" => {
                    let file_name = field.file_name().unwrap_or("").to_string();
                    let data = field
                        .bytes()
                        .await
                        .map_err(|e| AppError::BadRequest(e.to_string()))?;
                    // Browsers send an empty part when no file was picked.
                    if file_name.is_empty() && data.is_empty() {
                        continue;
                    }
                    let file = AssetFile::new(file_name, data.to_vec());
                    if name == "images" {
                        defect::validate_attachment(AttachmentKind::Image, &file.file_name)?;
                        form.images.push(file);
                    } else {
                        defect::validate_attachment(AttachmentKind::Report, &file.file_name)?;
                        if form.pdf_report.replace(file).is_some() {
                            return Err(CoreError::Validation(
                                "At most one PDF report may be attached".into(),
                            )
                            .into());
                        }
                    }
                }
                "model" | "timestamp" | "description" | "root_cause" | "short_term_action"
                | "long_term_action" => {
                    let text = field
                        .text()
                        .await
                        .map_err(|e| AppError::BadRequest(e.to_string()))?;
                    *form.text_field(&name) = text;
                }
                _ => {} // ignore unknown fields
            }
        }

        Ok(form)
    }

    fn text_field(&mut self, name: &str) -> &mut String {
        match name {
            "model" => &mut self.model,
            "timestamp" => &mut self.timestamp,
            "description" => &mut self.description,
            "root_cause" => &mut self.root_cause,
            "short_term_action" => &mut self.short_term_action,
            _ => &mut self.long_term_action,
        }
    }
}

// ---------------------------------------------------------------------------
// Code generation
// ---------------------------------------------------------------------------

/// Generate a code, retrying a few times if the store already holds it.
///
/// After [`MAX_CODE_ATTEMPTS`] collisions the last candidate is used anyway;
/// lookups by code then resolve to the oldest record.
pub async fn generate_fresh_code<R: Rng + ?Sized>(
    pool: &PgPool,
    model: &str,
    timestamp: &str,
    rng: &mut R,
) -> AppResult<DefectCode> {
    let mut attempt = 1;
    loop {
        let code = defect_code::generate_code_with_rng(model, timestamp, rng)
            .map_err(CoreError::from)?;
        if !DefectRecordRepo::code_exists(pool, code.as_str()).await? {
            return Ok(code);
        }
        if attempt == MAX_CODE_ATTEMPTS {
            tracing::warn!(%code, model, "Defect code collides after retries, keeping duplicate");
            return Ok(code);
        }
        tracing::debug!(%code, attempt, "Defect code already in use, regenerating");
        attempt += 1;
    }
}

// ---------------------------------------------------------------------------
// POST /defects
// ---------------------------------------------------------------------------

/// Upload outcome returned alongside a newly created record.
#[derive(Debug, Serialize)]
pub struct AttachmentReport {
    pub images: UploadReport,
    pub pdf_report: UploadReport,
}

/// Response payload for a created defect.
#[derive(Debug, Serialize)]
pub struct CreatedDefect {
    pub record: DefectDetail,
    pub uploads: AttachmentReport,
}

/// Log a new defect from a multipart form.
///
/// The code is generated from `model` and `timestamp`. The timestamp is
/// stored zero-padded. Required fields are checked before anything is
/// uploaded.
pub async fn create_defect(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    let mut form = DefectForm::from_multipart(&mut multipart).await?;

    let error_code = if form.model.is_empty() || form.timestamp.is_empty() {
        String::new()
    } else {
        form.timestamp = defect::validate_timestamp(&form.timestamp)?;
        let mut rng = StdRng::from_rng(&mut rand::rng());
        generate_fresh_code(&state.pool, &form.model, &form.timestamp, &mut rng)
            .await?
            .into_string()
    };

    let mut input = CreateDefectRecord {
        model: form.model,
        error_code,
        description: form.description,
        root_cause: form.root_cause,
        short_term_action: form.short_term_action,
        long_term_action: form.long_term_action,
        timestamp: form.timestamp,
        images: Vec::new(),
        pdf_report: String::new(),
    };
    input.check()?;

    let image_report = upload_all(state.assets.as_ref(), &form.images, &state.asset_folder).await;
    let pdf_files: Vec<AssetFile> = form.pdf_report.into_iter().collect();
    let pdf_report = upload_all(state.assets.as_ref(), &pdf_files, &state.asset_folder).await;

    input.images = image_report.urls.clone();
    input.pdf_report = pdf_report.first_url_or_empty();

    let record = DefectRecordRepo::insert(&state.pool, &input).await?;

    tracing::info!(
        defect_id = record.id,
        error_code = %record.error_code,
        model = %record.model,
        images = record.images.len(),
        failed_uploads = image_report.failed.len() + pdf_report.failed.len(),
        "Defect record created",
    );

    let created = CreatedDefect {
        record: record.into_detail(),
        uploads: AttachmentReport {
            images: image_report,
            pdf_report,
        },
    };
    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

// ---------------------------------------------------------------------------
// GET /defects/code-preview
// ---------------------------------------------------------------------------

/// Query parameters for previewing a generated code.
#[derive(Debug, Deserialize)]
pub struct CodePreviewParams {
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct CodePreview {
    pub error_code: DefectCode,
}

/// Preview the code a defect would receive.
///
/// The suffix is random, so the code actually stored on save will differ.
pub async fn preview_code(Query(params): Query<CodePreviewParams>) -> AppResult<impl IntoResponse> {
    if params.model.is_empty() || params.timestamp.is_empty() {
        return Err(CoreError::Validation("model and timestamp are required".into()).into());
    }
    let error_code =
        defect_code::generate_code(&params.model, &params.timestamp).map_err(CoreError::from)?;
    Ok(Json(DataResponse {
        data: CodePreview { error_code },
    }))
}

// ---------------------------------------------------------------------------
// GET /defects?model=
// ---------------------------------------------------------------------------

/// List all defects logged for a model. An unknown model yields an empty list.
pub async fn list_by_model(
    State(state): State<AppState>,
    Query(params): Query<DefectListParams>,
) -> AppResult<impl IntoResponse> {
    let rows = DefectRecordRepo::find_by_model(&state.pool, &params.model).await?;
    if rows.is_empty() {
        tracing::debug!(model = %params.model, "No defects for model");
    }
    Ok(Json(DataResponse { data: rows }))
}

// ---------------------------------------------------------------------------
// GET /defects/{code}
// ---------------------------------------------------------------------------

/// Get a single defect by its exact code.
pub async fn get_by_code(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> AppResult<impl IntoResponse> {
    let record = DefectRecordRepo::find_one_by_code(&state.pool, &code)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "DefectRecord",
                key: code.clone(),
            })
        })?;

    Ok(Json(DataResponse { data: record }))
}
