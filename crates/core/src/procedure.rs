//! Static defect-handling procedure served by the reference endpoint.

use serde::Serialize;

/// Title of the production-line defect handling procedure.
pub const PROCEDURE_TITLE: &str = "Defective Product Handling on the Production Line";

/// Flow diagram for the procedure.
pub const PROCEDURE_DIAGRAM_URL: &str = "https://raw.githubusercontent.com/DuyKhong94/Handbook/blob/e715218bb20e69eb00814f9bc04f2876446730eb/Quy%20Tr%C3%ACnh.jpg";

/// One numbered step of the procedure.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ProcedureStep {
    pub step: u8,
    pub title: &'static str,
    pub detail: &'static str,
}

/// Ordered procedure steps.
pub const PROCEDURE_STEPS: &[ProcedureStep] = &[
    ProcedureStep {
        step: 1,
        title: "Identify the defect",
        detail: "The technician identifies the defect from the customer's description and photos.",
    },
    ProcedureStep {
        step: 2,
        title: "Look up the defect code",
        detail: "Search by model or defect code to find the code and its related information.",
    },
    ProcedureStep {
        step: 3,
        title: "Analyse the root cause",
        detail: "Read the root cause section to understand why the defect occurred.",
    },
    ProcedureStep {
        step: 4,
        title: "Propose a solution",
        detail: "Based on the analysed cause, propose short-term and long-term corrective actions.",
    },
    ProcedureStep {
        step: 5,
        title: "Record and follow up",
        detail: "Log every handling step so it can feed future product improvement.",
    },
];
