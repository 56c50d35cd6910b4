//! Tab content

pub mod registry;

pub use registry::render_tab_content;
