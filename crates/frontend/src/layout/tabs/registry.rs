//! Tab content registry: the single mapping from `AppTab` to its view

use crate::dashboards::{FuelOverviewDashboard, ReportsDashboard};
use crate::domain::a006_fuel_price::ui::details::FuelPriceEntry;
use crate::domain::a007_fuel_transaction::ui::details::FuelTransactionEntry;
use crate::layout::global_context::AppTab;
use leptos::prelude::*;

/// Render the content of a tab. Each switch mounts a fresh screen, so
/// screens reload their data and drop in-flight results of the previous one.
pub fn render_tab_content(tab: AppTab) -> AnyView {
    match tab {
        AppTab::Dashboard => view! { <FuelOverviewDashboard /> }.into_any(),
        AppTab::PriceEntry => view! { <FuelPriceEntry /> }.into_any(),
        AppTab::TransactionEntry => view! { <FuelTransactionEntry /> }.into_any(),
        AppTab::Reports => view! { <ReportsDashboard /> }.into_any(),
    }
}
