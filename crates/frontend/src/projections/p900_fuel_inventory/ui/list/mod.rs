use crate::projections::p900_fuel_inventory::summary::total_stock;
use crate::shared::format::{format_amount, format_datetime};
use contracts::projections::p900_fuel_inventory::FuelInventoryDto;
use leptos::prelude::*;

/// Full inventory table with a stock total row (Reports)
#[component]
pub fn FuelInventoryTable(#[prop(into)] rows: Signal<Vec<FuelInventoryDto>>) -> impl IntoView {
    let total = Signal::derive(move || rows.with(|r| total_stock(r)));

    view! {
        <Show
            when=move || rows.with(|r| !r.is_empty())
            fallback=|| view! { <p class="empty-state">"No inventory data to display."</p> }
        >
            <div class="table-container">
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Fuel Type"</th>
                            <th>"Location Type"</th>
                            <th>"Location Name"</th>
                            <th class="text-right">"Current Stock (Liters)"</th>
                            <th>"Last Updated"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || rows.get()
                            key=|item| item.inventory_id
                            children=move |item: FuelInventoryDto| {
                                view! {
                                    <tr>
                                        <td>{item.fuel_type_name.clone()}</td>
                                        <td>{item.location_type.clone()}</td>
                                        <td>{item.location_name.clone().unwrap_or_default()}</td>
                                        <td class="text-right">{format_amount(item.current_stock)}</td>
                                        <td>{format_datetime(&item.last_updated)}</td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                    <tfoot>
                        <tr class="data-table__total">
                            <td colspan="3">"Total"</td>
                            <td class="text-right">{move || format_amount(total.get())}</td>
                            <td></td>
                        </tr>
                    </tfoot>
                </table>
            </div>
        </Show>
    }
}
