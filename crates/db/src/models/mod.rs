//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - `FromRow` + `Serialize` structs matching the rows a query returns
//! - A `Deserialize` create DTO for inserts

pub mod defect_record;
