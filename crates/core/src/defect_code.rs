//! Defect code generation.
//!
//! A defect code is a short identifier a technician can read back over the
//! phone: `{model_part}{month_letter}{day}{suffix}`, e.g. `333J12QWE` for
//! model `030333011` logged on `2025-10-12`.
//!
//! - `model_part` = characters 3..6 of the model, or the whole model when it
//!   is shorter than six characters
//! - `month_letter` = `A` for January through `L` for December
//! - `day` = two-digit day of month
//! - `suffix` = three random uppercase ASCII letters
//!
//! The suffix is not checked for uniqueness here; callers that care about
//! collisions must consult the store.

use std::fmt;
use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use rand::Rng;
use regex::Regex;
use serde::Serialize;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Code returned by [`generate_code_or_sentinel`] when generation fails.
pub const SENTINEL_CODE: &str = "ERR000";

/// `chrono` format string for the defect date (`YYYY-MM-DD`).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d";

/// Accepted date shape. Month and day may drop their leading zero.
const TIMESTAMP_PATTERN: &str = r"^([0-9]{4})-[0-9]{1,2}-[0-9]{1,2}$";

static TIMESTAMP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(TIMESTAMP_PATTERN).expect("valid regex"));

/// Models shorter than this are used verbatim as the leading segment.
pub const MODEL_SLICE_MIN_LEN: usize = 6;

/// Character offset of the model slice.
const MODEL_SLICE_START: usize = 3;

/// Number of random letters appended to every code.
pub const SUFFIX_LEN: usize = 3;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// A generated defect code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct DefectCode(String);

impl DefectCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for DefectCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Reasons a defect code could not be generated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DefectCodeError {
    #[error("Invalid timestamp '{0}'. Expected format YYYY-MM-DD")]
    InvalidTimestamp(String),
}

// ---------------------------------------------------------------------------
// Building blocks
// ---------------------------------------------------------------------------

/// Parse a defect date in `YYYY-MM-DD` form.
///
/// The shape is checked before `chrono` sees the input, since `chrono`
/// tolerates padding, signs and year zero.
pub fn parse_timestamp(timestamp: &str) -> Result<NaiveDate, DefectCodeError> {
    let invalid = || DefectCodeError::InvalidTimestamp(timestamp.to_string());

    let year = TIMESTAMP_RE
        .captures(timestamp)
        .and_then(|caps| caps.get(1))
        .ok_or_else(invalid)?;
    if year.as_str() == "0000" {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(timestamp, TIMESTAMP_FORMAT).map_err(|_| invalid())
}

/// Parse `timestamp` and render it back as zero-padded `YYYY-MM-DD`.
pub fn normalize_timestamp(timestamp: &str) -> Result<String, DefectCodeError> {
    parse_timestamp(timestamp).map(|date| date.format(TIMESTAMP_FORMAT).to_string())
}

/// Leading segment of a defect code derived from the model identifier.
///
/// Slicing is by `char`, so non-ASCII models never split a code point.
pub fn model_part(model: &str) -> &str {
    if model.chars().count() < MODEL_SLICE_MIN_LEN {
        return model;
    }
    let byte_offset = |nth: usize| {
        model
            .char_indices()
            .nth(nth)
            .map_or(model.len(), |(idx, _)| idx)
    };
    &model[byte_offset(MODEL_SLICE_START)..byte_offset(MODEL_SLICE_MIN_LEN)]
}

/// Map a month number (1-12) to its letter (`A`-`L`).
pub fn month_letter(month: u32) -> char {
    debug_assert!((1..=12).contains(&month), "month out of range: {month}");
    char::from(b'@' + month as u8)
}

fn random_suffix<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..SUFFIX_LEN)
        .map(|_| char::from(rng.random_range(b'A'..=b'Z')))
        .collect()
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

/// Generate a defect code using the thread-local RNG.
pub fn generate_code(model: &str, timestamp: &str) -> Result<DefectCode, DefectCodeError> {
    generate_code_with_rng(model, timestamp, &mut rand::rng())
}

/// Generate a defect code drawing the suffix from `rng`.
pub fn generate_code_with_rng<R: Rng + ?Sized>(
    model: &str,
    timestamp: &str,
    rng: &mut R,
) -> Result<DefectCode, DefectCodeError> {
    let date = parse_timestamp(timestamp)?;
    Ok(DefectCode(format!(
        "{}{}{:02}{}",
        model_part(model),
        month_letter(date.month()),
        date.day(),
        random_suffix(rng)
    )))
}

/// Generate a defect code, falling back to [`SENTINEL_CODE`] on any failure.
///
/// Callers that need to reject malformed input should use [`generate_code`]
/// instead; this variant never fails.
pub fn generate_code_or_sentinel(model: &str, timestamp: &str) -> String {
    generate_code(model, timestamp)
        .map(DefectCode::into_string)
        .unwrap_or_else(|_| SENTINEL_CODE.to_string())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
