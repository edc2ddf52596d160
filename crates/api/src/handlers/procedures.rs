//! Handler for the static defect-handling procedure.

use axum::Json;
use serde::Serialize;

use handbook_core::procedure::{
    ProcedureStep, PROCEDURE_DIAGRAM_URL, PROCEDURE_STEPS, PROCEDURE_TITLE,
};

use crate::response::DataResponse;

#[derive(Debug, Serialize)]
pub struct Procedure {
    pub title: &'static str,
    pub diagram_url: &'static str,
    pub steps: &'static [ProcedureStep],
}

/// GET /procedures
pub async fn get_procedure() -> Json<DataResponse<Procedure>> {
    Json(DataResponse {
        data: Procedure {
            title: PROCEDURE_TITLE,
            diagram_url: PROCEDURE_DIAGRAM_URL,
            steps: PROCEDURE_STEPS,
        },
    })
}
