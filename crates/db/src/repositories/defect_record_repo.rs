//! Repository for the `defect_records` table.
//!
//! Records are insert-only. Lookups are exact-match and return rows in
//! insertion order, so a duplicated code resolves to its oldest record.

use sqlx::PgPool;

use crate::models::defect_record::{
    CreateDefectRecord, DefectDetail, DefectRecord, DefectSummary,
};

/// Column list for full `defect_records` rows.
const COLUMNS: &str = "\
    id, model, error_code, description, root_cause, \
    short_term_action, long_term_action, \"timestamp\", \
    images, pdf_report, created_at";

/// Column list for the detail view (no internal id).
const DETAIL_COLUMNS: &str = "\
    model, error_code, description, root_cause, \
    short_term_action, long_term_action, \"timestamp\", \
    images, pdf_report";

/// Column list for model listings (no id, no attachments).
const SUMMARY_COLUMNS: &str = "\
    model, error_code, description, root_cause, \
    short_term_action, long_term_action, \"timestamp\"";

/// Provides insert and lookup operations for defect records.
pub struct DefectRecordRepo;

impl DefectRecordRepo {
    /// Insert one defect record, returning the stored row.
    ///
    /// No deduplication is performed; a second insert with the same code
    /// creates a second row.
    pub async fn insert(
        pool: &PgPool,
        input: &CreateDefectRecord,
    ) -> Result<DefectRecord, sqlx::Error> {
        let query = format!(
            "INSERT INTO defect_records \
                (model, error_code, description, root_cause, \
                 short_term_action, long_term_action, \"timestamp\", \
                 images, pdf_report) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DefectRecord>(&query)
            .bind(&input.model)
            .bind(&input.error_code)
            .bind(&input.description)
            .bind(&input.root_cause)
            .bind(&input.short_term_action)
            .bind(&input.long_term_action)
            .bind(&input.timestamp)
            .bind(&input.images)
            .bind(&input.pdf_report)
            .fetch_one(pool)
            .await
    }

    /// List every record for `model` (exact match), oldest first.
    pub async fn find_by_model(
        pool: &PgPool,
        model: &str,
    ) -> Result<Vec<DefectSummary>, sqlx::Error> {
        let query =
            format!("SELECT {SUMMARY_COLUMNS} FROM defect_records WHERE model = $1 ORDER BY id");
        sqlx::query_as::<_, DefectSummary>(&query)
            .bind(model)
            .fetch_all(pool)
            .await
    }

    /// Find the first record carrying `code` (exact match).
    pub async fn find_one_by_code(
        pool: &PgPool,
        code: &str,
    ) -> Result<Option<DefectDetail>, sqlx::Error> {
        let query = format!(
            "SELECT {DETAIL_COLUMNS} FROM defect_records \
             WHERE error_code = $1 ORDER BY id LIMIT 1"
        );
        sqlx::query_as::<_, DefectDetail>(&query)
            .bind(code)
            .fetch_optional(pool)
            .await
    }

    /// Whether any record already carries `code`.
    pub async fn code_exists(pool: &PgPool, code: &str) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM defect_records WHERE error_code = $1)",
        )
        .bind(code)
        .fetch_one(pool)
        .await
    }
}
