pub mod api_utils;
pub mod config;
pub mod entity_form;
pub mod format;
pub mod icons;
pub mod list_utils;
pub mod master_data;
pub mod notification;
