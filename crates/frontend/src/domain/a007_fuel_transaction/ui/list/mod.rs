use crate::shared::format::{format_amount, format_datetime};
use contracts::domain::a007_fuel_transaction::FuelTransaction;
use leptos::prelude::*;

/// Total cost cell; zero and missing totals read "N/A"
pub fn total_cost_label(transaction: &FuelTransaction) -> String {
    match transaction.total_cost {
        Some(total) if total != 0.0 => format_amount(total),
        _ => "N/A".to_string(),
    }
}

/// Full transaction table (Reports)
#[component]
pub fn FuelTransactionTable(#[prop(into)] rows: Signal<Vec<FuelTransaction>>) -> impl IntoView {
    view! {
        <Show
            when=move || rows.with(|r| !r.is_empty())
            fallback=|| view! { <p class="empty-state">"No transaction data to display."</p> }
        >
            <div class="table-container">
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"ID"</th>
                            <th>"Type"</th>
                            <th>"Source"</th>
                            <th>"Destination"</th>
                            <th>"Fuel"</th>
                            <th class="text-right">"Qty"</th>
                            <th>"Date"</th>
                            <th class="text-right">"Total Cost"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || rows.get()
                            key=|t| t.transaction_id
                            children=move |t: FuelTransaction| {
                                view! {
                                    <tr>
                                        <td title=t.usage_transition_id.clone()>{t.short_id()}</td>
                                        <td>{t.transaction_type.clone()}</td>
                                        <td>{t.source_label()}</td>
                                        <td>{t.destination_label()}</td>
                                        <td>{t.fuel_type_name.clone()}</td>
                                        <td class="text-right">{format_amount(t.quantity)}</td>
                                        <td>{format_datetime(&t.transaction_date)}</td>
                                        <td class="text-right">{total_cost_label(&t)}</td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_total_cost_label() {
        let mut t: FuelTransaction = serde_json::from_value(json!({
            "transactionID": 1,
            "usageTransitionID": "0f8e2c1a-1111",
            "transactionType": "Fuel Transfer Process",
            "sourceLocationType": "Warehouse",
            "destinationLocationType": "Site",
            "fuelTypeName": "Diesel",
            "quantity": 10.0,
            "transactionDate": "2024-01-01T03:30:00",
            "totalCost": 1250.5
        }))
        .unwrap();
        assert_eq!(total_cost_label(&t), "1250.50");

        t.total_cost = Some(0.0);
        assert_eq!(total_cost_label(&t), "N/A");
        t.total_cost = None;
        assert_eq!(total_cost_label(&t), "N/A");
    }
}
