use crate::domain::a007_fuel_transaction::api::fetch_transactions;
use crate::projections::p900_fuel_inventory::api::fetch_inventory;
use crate::projections::p900_fuel_inventory::summary::stock_by_fuel_type;
use crate::projections::p901_price_fluctuations::api::fetch_fluctuations;
use crate::shared::api_utils::FetchScope;
use crate::shared::config::AppConfig;
use crate::shared::format::{format_amount, format_date, format_datetime};
use crate::shared::list_utils::load_list;
use crate::shared::notification::use_notifier;
use contracts::domain::a007_fuel_transaction::FuelTransaction;
use contracts::projections::p900_fuel_inventory::FuelInventoryDto;
use contracts::projections::p901_price_fluctuations::PriceFluctuationDto;
use leptos::prelude::*;
use thaw::*;

/// First `n` rows, in API order
fn recent<T: Clone>(rows: &[T], n: usize) -> Vec<T> {
    rows.iter().take(n).cloned().collect()
}

/// Dashboard: stock per fuel type, recent fluctuations and transactions
#[component]
pub fn FuelOverviewDashboard() -> impl IntoView {
    let notifier = use_notifier();
    let recent_rows = use_context::<AppConfig>()
        .map(|c| c.ui.recent_rows)
        .unwrap_or(5);
    let scope = FetchScope::for_component();

    let inventory = RwSignal::new(Vec::<FuelInventoryDto>::new());
    let fluctuations = RwSignal::new(Vec::<PriceFluctuationDto>::new());
    let transactions = RwSignal::new(Vec::<FuelTransaction>::new());

    // Independent fetches; each failure has its own message
    {
        let scope = scope.clone();
        load_list(
            inventory,
            async move { fetch_inventory(&scope).await },
            "Failed to load inventory data.",
            notifier,
        );
    }
    {
        let scope = scope.clone();
        load_list(
            fluctuations,
            async move { fetch_fluctuations(&scope).await },
            "Failed to load price fluctuation data.",
            notifier,
        );
    }
    load_list(
        transactions,
        async move { fetch_transactions(&scope).await },
        "Failed to load transaction data.",
        notifier,
    );

    let stock = Signal::derive(move || inventory.with(|rows| stock_by_fuel_type(rows)));
    let recent_fluctuations = Signal::derive(move || fluctuations.with(|rows| recent(rows, recent_rows)));
    let recent_transactions = Signal::derive(move || transactions.with(|rows| recent(rows, recent_rows)));

    view! {
        <div class="dashboard">
            <section class="dashboard__section">
                <h2 class="dashboard__title">"Current Fuel Stock"</h2>
                <Show
                    when=move || stock.with(|s| !s.is_empty())
                    fallback=|| view! { <p class="empty-state">"No fuel stock data available."</p> }
                >
                    <div class="stock-cards">
                        <For
                            each=move || stock.get()
                            key=|s| s.fuel_type_name.clone()
                            children=move |s| {
                                view! {
                                    <div class="stock-card">
                                        <div class="stock-card__name">{s.fuel_type_name}</div>
                                        <div class="stock-card__value">
                                            {format_amount(s.total)}
                                            <span class="stock-card__unit">" Liters"</span>
                                        </div>
                                    </div>
                                }
                            }
                        />
                    </div>
                </Show>
            </section>

            <section class="dashboard__section">
                <h2 class="dashboard__title">
                    "Recent Price Fluctuations "
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Informative>
                        {move || fluctuations.with(|r| r.len())}
                    </Badge>
                </h2>
                <Show
                    when=move || recent_fluctuations.with(|r| !r.is_empty())
                    fallback=|| view! { <p class="empty-state">"No recent price fluctuations."</p> }
                >
                    <div class="table-container">
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"Fuel Type"</th>
                                    <th>"Date"</th>
                                    <th class="text-right">"Current Price"</th>
                                    <th>"Change"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || recent_fluctuations.get()
                                    key=|f| f.fluctuation_id
                                    children=move |f: PriceFluctuationDto| {
                                        view! {
                                            <tr>
                                                <td>{f.fuel_type_name.clone()}</td>
                                                <td>{format_date(&f.fluctuation_date)}</td>
                                                <td class="text-right">{format_amount(f.current_price)}</td>
                                                <td class=f.fluctuation_type.css_class()>{f.change_label()}</td>
                                            </tr>
                                        }
                                    }
                                />
                            </tbody>
                        </table>
                    </div>
                </Show>
            </section>

            <section class="dashboard__section">
                <h2 class="dashboard__title">
                    "Recent Transactions "
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Informative>
                        {move || transactions.with(|r| r.len())}
                    </Badge>
                </h2>
                <Show
                    when=move || recent_transactions.with(|r| !r.is_empty())
                    fallback=|| view! { <p class="empty-state">"No recent transactions."</p> }
                >
                    <div class="table-container">
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"ID"</th>
                                    <th>"Type"</th>
                                    <th>"Fuel"</th>
                                    <th class="text-right">"Quantity"</th>
                                    <th>"Date"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || recent_transactions.get()
                                    key=|t| t.transaction_id
                                    children=move |t: FuelTransaction| {
                                        view! {
                                            <tr>
                                                <td>{t.short_id()}</td>
                                                <td>{t.transaction_type.clone()}</td>
                                                <td>{t.fuel_type_name.clone()}</td>
                                                <td class="text-right">{format_amount(t.quantity)}</td>
                                                <td>{format_datetime(&t.transaction_date)}</td>
                                            </tr>
                                        }
                                    }
                                />
                            </tbody>
                        </table>
                    </div>
                </Show>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recent_takes_first_rows() {
        let rows: Vec<u32> = (1..=8).collect();
        assert_eq!(recent(&rows, 5), vec![1, 2, 3, 4, 5]);
        assert_eq!(recent(&rows[..2], 5), vec![1, 2]);
    }
}
