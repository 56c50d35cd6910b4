use super::model::{
    location_type_options, price_options, transaction_type_options, FUEL_TRANSACTION_FORM,
    MASTER_DATA, MASTER_DATA_ERROR, PRICE_DATA, PRICE_DATA_ERROR,
};
use crate::shared::entity_form::{
    choices, DraftInput, DraftSelect, DraftTextarea, EntityFormViewModel,
};
use crate::shared::icons::icon;
use crate::shared::master_data::resolver::{
    fuel_price_candidates, project, resolve_destinations, resolve_sources,
};
use crate::shared::master_data::MasterDataLoader;
use crate::shared::notification::use_notifier;
use contracts::domain::a007_fuel_transaction::FuelTransactionCreateDto;
use contracts::enums::LocationType;
use leptos::prelude::*;

/// Transaction Entry screen
#[component]
pub fn FuelTransactionEntry() -> impl IntoView {
    let notifier = use_notifier();

    let master = MasterDataLoader::new();
    master.load(MASTER_DATA, MASTER_DATA_ERROR, notifier);
    let prices = MasterDataLoader::new();
    prices.load(PRICE_DATA, PRICE_DATA_ERROR, notifier);

    let vm = EntityFormViewModel::new(&FUEL_TRANSACTION_FORM, notifier);

    // Dependent option lists follow their discriminator
    let source_options = Signal::derive(move || {
        let discriminator = vm.value("sourceLocationType");
        master
            .data
            .with(|d| choices(resolve_sources(&discriminator, d)))
    });
    let destination_options = Signal::derive(move || {
        let discriminator = vm.value("destinationLocationType");
        master
            .data
            .with(|d| choices(resolve_destinations(&discriminator, d)))
    });
    let price_candidates = Signal::derive(move || {
        let fuel_type = vm.value("fuelTypeID");
        prices
            .data
            .with(|d| price_options(&fuel_price_candidates(&fuel_type, &d.fuel_prices)))
    });
    let fuel_types = Signal::derive(move || master.data.with(|d| choices(project(&d.fuel_types))));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit::<FuelTransactionCreateDto>();
    };

    view! {
        <section class="entry-card">
            <h2 class="entry-card__title">"Fuel Transaction Entry"</h2>
            <Show when=move || master.is_loading() || prices.is_loading()>
                <div class="entry-card__hint">"Loading reference data..."</div>
            </Show>
            <form class="form" on:submit=on_submit>
                <DraftSelect
                    vm=vm
                    name="transactionType"
                    placeholder="Select Transaction Type"
                    options=Signal::derive(transaction_type_options)
                />

                <div class="form__row">
                    <DraftSelect
                        vm=vm
                        name="sourceLocationType"
                        placeholder="Select Source Type"
                        options=Signal::derive(|| location_type_options(LocationType::all()))
                    />
                    <DraftSelect
                        vm=vm
                        name="sourceLocationID"
                        placeholder="Select Source"
                        options=source_options
                        disabled=Signal::derive(move || vm.value("sourceLocationType").is_empty())
                    />
                </div>

                <div class="form__row">
                    <DraftSelect
                        vm=vm
                        name="destinationLocationType"
                        placeholder="Select Destination Type"
                        options=Signal::derive(|| location_type_options(LocationType::destinations()))
                    />
                    <DraftSelect
                        vm=vm
                        name="destinationLocationID"
                        placeholder="Select Destination"
                        options=destination_options
                        disabled=Signal::derive(move || vm.value("destinationLocationType").is_empty())
                    />
                </div>

                <div class="form__row">
                    <DraftSelect vm=vm name="fuelTypeID" placeholder="Select Fuel Type" options=fuel_types />
                    <DraftInput vm=vm name="quantity" input_type="number" step="0.01" />
                </div>

                <div class="form__row">
                    <DraftInput vm=vm name="transactionDate" input_type="datetime-local" />
                    <DraftSelect
                        vm=vm
                        name="fuelPriceID"
                        placeholder="Select Price (if applicable)"
                        options=price_candidates
                        disabled=Signal::derive(move || vm.value("fuelTypeID").is_empty())
                    />
                </div>

                <div class="form__row form__row--three">
                    <DraftInput vm=vm name="transportationCost" input_type="number" step="0.01" />
                    <DraftInput vm=vm name="loadingUnloadingCost" input_type="number" step="0.01" />
                    <DraftInput vm=vm name="otherCost" input_type="number" step="0.01" />
                </div>

                <DraftTextarea vm=vm name="notes" />

                <div class="form__actions">
                    <button
                        type="submit"
                        class="btn btn-primary"
                        disabled=move || vm.is_submitting()
                    >
                        {icon("save")}
                        {move || if vm.is_submitting() { "Saving..." } else { "Record Transaction" }}
                    </button>
                </div>
            </form>
        </section>
    }
}
