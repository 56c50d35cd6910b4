//! Schema-driven entry forms
//!
//! A form is described by a static [`FormSchema`]; the [`EntityFormController`]
//! owns the draft, coerces it into a typed payload and runs the
//! Editing -> Submitting -> Editing cycle. [`EntityFormViewModel`] wires the
//! controller to signals and the write endpoint.

pub mod controller;
pub mod fields;
pub mod schema;
pub mod view_model;

pub use controller::{EntityFormController, FormClock, FormError, FormPhase};
pub use fields::{choices, DraftInput, DraftSelect, DraftTextarea, SelectOption};
pub use schema::{FieldKind, FieldSpec, FormSchema, InitialValue, Presence};
pub use view_model::EntityFormViewModel;
