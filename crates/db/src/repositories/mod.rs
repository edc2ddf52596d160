//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods
//! that accept `&PgPool` as the first argument.

pub mod defect_record_repo;

pub use defect_record_repo::DefectRecordRepo;
