use crate::shared::api_utils::api_base;
use chrono::{Datelike, Utc};
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let year = Utc::now().year();
    let api = api_base();

    view! {
        <footer data-zone="footer" class="status-bar">
            <span>{format!("© {} Fuel Inventory Management System", year)}</span>
            <span class="status-bar__api" title="API base URL">{api}</span>
        </footer>
    }
}
