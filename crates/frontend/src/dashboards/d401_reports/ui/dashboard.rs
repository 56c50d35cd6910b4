use crate::dashboards::d401_reports::filter::{fuel_type_options, ReportFilter, ReportKind};
use crate::domain::a007_fuel_transaction::api::fetch_transactions;
use crate::domain::a007_fuel_transaction::ui::list::FuelTransactionTable;
use crate::projections::p900_fuel_inventory::api::fetch_inventory;
use crate::projections::p900_fuel_inventory::ui::list::FuelInventoryTable;
use crate::projections::p901_price_fluctuations::api::fetch_fluctuations;
use crate::projections::p901_price_fluctuations::ui::list::PriceFluctuationTable;
use crate::shared::api_utils::FetchScope;
use crate::shared::entity_form::SelectOption;
use crate::shared::list_utils::{fuel_type_names, load_list, FuelTypeScoped};
use crate::shared::notification::use_notifier;
use contracts::domain::a007_fuel_transaction::FuelTransaction;
use contracts::enums::LocationType;
use contracts::projections::p900_fuel_inventory::FuelInventoryDto;
use contracts::projections::p901_price_fluctuations::PriceFluctuationDto;
use leptos::prelude::*;
use thaw::*;

/// Reports screen: inventory, transactions and fluctuations with filters
#[component]
pub fn ReportsDashboard() -> impl IntoView {
    let notifier = use_notifier();
    let scope = FetchScope::for_component();

    let inventory = RwSignal::new(Vec::<FuelInventoryDto>::new());
    let transactions = RwSignal::new(Vec::<FuelTransaction>::new());
    let fluctuations = RwSignal::new(Vec::<PriceFluctuationDto>::new());

    {
        let scope = scope.clone();
        load_list(
            inventory,
            async move { fetch_inventory(&scope).await },
            "Failed to load inventory data for reports.",
            notifier,
        );
    }
    {
        let scope = scope.clone();
        load_list(
            transactions,
            async move { fetch_transactions(&scope).await },
            "Failed to load transaction data for reports.",
            notifier,
        );
    }
    load_list(
        fluctuations,
        async move { fetch_fluctuations(&scope).await },
        "Failed to load price fluctuation data for reports.",
        notifier,
    );

    let active = RwSignal::new(ReportKind::default());
    let filter = RwSignal::new(ReportFilter::default());

    // Filter choices come from whatever has loaded
    let fuel_choices = Signal::derive(move || {
        inventory.with(|inv| {
            transactions.with(|tx| {
                fluctuations.with(|fl| {
                    fuel_type_options(fuel_type_names(
                        inv.iter()
                            .map(FuelTypeScoped::fuel_type_name)
                            .chain(tx.iter().map(FuelTypeScoped::fuel_type_name))
                            .chain(fl.iter().map(FuelTypeScoped::fuel_type_name)),
                    ))
                })
            })
        })
    });

    let filtered_inventory =
        Signal::derive(move || filter.with(|f| inventory.with(|rows| f.inventory(rows))));
    let filtered_transactions =
        Signal::derive(move || filter.with(|f| transactions.with(|rows| f.transactions(rows))));
    let filtered_fluctuations =
        Signal::derive(move || filter.with(|f| fluctuations.with(|rows| f.fluctuations(rows))));

    view! {
        <div class="reports">
            <h2 class="reports__title">"Fuel Reports"</h2>

            <div class="reports__tabs">
                {ReportKind::all()
                    .into_iter()
                    .map(|kind| {
                        view! {
                            <Button
                                appearance=Signal::derive(move || {
                                    if active.get() == kind {
                                        ButtonAppearance::Primary
                                    } else {
                                        ButtonAppearance::Secondary
                                    }
                                })
                                on_click=move |_| {
                                    leptos::logging::log!("report tab: {}", kind.key());
                                    active.set(kind);
                                }
                            >
                                {kind.tab_label()}
                            </Button>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="reports__filters">
                <label class="form__label">
                    "Fuel Type "
                    <select
                        class="form__input"
                        on:change=move |ev| filter.update(|f| f.fuel_type = event_target_value(&ev))
                    >
                        <option value="" selected=move || filter.with(|f| f.fuel_type.is_empty())>"All"</option>
                        <For
                            each=move || fuel_choices.get()
                            key=|opt| opt.clone()
                            children=move |opt: SelectOption| {
                                let value = opt.value.clone();
                                view! {
                                    <option
                                        value=opt.value
                                        selected=move || filter.with(|f| f.selects_fuel_type(&value))
                                    >
                                        {opt.label}
                                    </option>
                                }
                            }
                        />
                    </select>
                </label>

                <Show when=move || active.get() == ReportKind::Inventory>
                    <label class="form__label">
                        "Location Type "
                        <select
                            class="form__input"
                            on:change=move |ev| filter.update(|f| f.location_type = event_target_value(&ev))
                        >
                            <option value="" selected=move || filter.with(|f| f.location_type.is_empty())>"All"</option>
                            {LocationType::all()
                                .into_iter()
                                .map(|t| {
                                    view! {
                                        <option
                                            value=t.code()
                                            selected=move || filter.with(|f| f.location_type == t.code())
                                        >
                                            {t.code()}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </label>
                </Show>

                <Show when=move || filter.with(ReportFilter::is_active)>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| filter.set(ReportFilter::default())
                    >
                        "Clear filters"
                    </Button>
                </Show>
            </div>

            <h3 class="reports__subtitle">{move || active.get().title()}</h3>
            {move || match active.get() {
                ReportKind::Inventory => view! { <FuelInventoryTable rows=filtered_inventory /> }.into_any(),
                ReportKind::Transactions => view! { <FuelTransactionTable rows=filtered_transactions /> }.into_any(),
                ReportKind::PriceFluctuations => view! { <PriceFluctuationTable rows=filtered_fluctuations /> }.into_any(),
            }}
        </div>
    }
}
