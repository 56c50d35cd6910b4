//! Wire contracts of the fuel inventory REST API.
//!
//! Field names follow the API verbatim (`fuelTypeID`, `supplierName`, ...),
//! so every struct carries explicit serde renames.

pub mod domain;
pub mod enums;
pub mod projections;
pub mod shared;
