pub mod filter;
pub mod ui;
