pub mod api;
pub mod summary;
pub mod ui;
