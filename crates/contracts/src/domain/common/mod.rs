//! Common types and traits for reference collections

pub mod reference_record;

pub use reference_record::{ReferenceOption, ReferenceRecord};
