//! Domain rules for the defect handbook.
//!
//! This crate has no I/O. It holds the defect-code generator, the field
//! rules applied before a defect record is persisted, and the static
//! procedure content served alongside the lookup endpoints.

pub mod defect;
pub mod defect_code;
pub mod error;
pub mod procedure;
pub mod types;
