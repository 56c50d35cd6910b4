use crate::shared::format::{format_amount, format_date, format_optional_amount};
use contracts::projections::p901_price_fluctuations::PriceFluctuationDto;
use leptos::prelude::*;

/// CSS modifier of a change amount by sign
pub fn amount_class(amount: Option<f64>) -> &'static str {
    match amount {
        Some(a) if a > 0.0 => "change--up",
        Some(a) if a < 0.0 => "change--down",
        _ => "change--flat",
    }
}

/// Change amount cell; zero and missing amounts read "-"
pub fn amount_label(amount: Option<f64>) -> String {
    format_optional_amount(amount.filter(|a| *a != 0.0))
}

/// Full price fluctuation table (Reports)
#[component]
pub fn PriceFluctuationTable(#[prop(into)] rows: Signal<Vec<PriceFluctuationDto>>) -> impl IntoView {
    view! {
        <Show
            when=move || rows.with(|r| !r.is_empty())
            fallback=|| view! { <p class="empty-state">"No price fluctuation data to display."</p> }
        >
            <div class="table-container">
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Fuel Type"</th>
                            <th>"Date"</th>
                            <th class="text-right">"Current Price"</th>
                            <th class="text-right">"Previous Price"</th>
                            <th class="text-right">"Change"</th>
                            <th>"Type"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || rows.get()
                            key=|f| f.fluctuation_id
                            children=move |f: PriceFluctuationDto| {
                                view! {
                                    <tr>
                                        <td>{f.fuel_type_name.clone()}</td>
                                        <td>{format_date(&f.fluctuation_date)}</td>
                                        <td class="text-right">{format_amount(f.current_price)}</td>
                                        <td class="text-right">{amount_label(f.previous_price)}</td>
                                        <td class=format!("text-right {}", amount_class(f.fluctuation_amount))>
                                            {amount_label(f.fluctuation_amount)}
                                        </td>
                                        <td>{f.fluctuation_type.label()}</td>
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
