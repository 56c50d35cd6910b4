use super::model::{FUEL_PRICE_FORM, MASTER_DATA, MASTER_DATA_ERROR};
use crate::shared::entity_form::{choices, DraftInput, DraftSelect, EntityFormViewModel};
use crate::shared::icons::icon;
use crate::shared::master_data::resolver::project;
use crate::shared::master_data::MasterDataLoader;
use crate::shared::notification::use_notifier;
use contracts::domain::a006_fuel_price::FuelPriceCreateDto;
use leptos::prelude::*;

/// Price Entry screen
#[component]
pub fn FuelPriceEntry() -> impl IntoView {
    let notifier = use_notifier();
    let loader = MasterDataLoader::new();
    loader.load(MASTER_DATA, MASTER_DATA_ERROR, notifier);

    let vm = EntityFormViewModel::new(&FUEL_PRICE_FORM, notifier);

    let fuel_types = Signal::derive(move || loader.data.with(|d| choices(project(&d.fuel_types))));
    let suppliers = Signal::derive(move || loader.data.with(|d| choices(project(&d.suppliers))));
    let townships = Signal::derive(move || loader.data.with(|d| choices(project(&d.townships))));
    let sites = Signal::derive(move || loader.data.with(|d| choices(project(&d.sites))));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit::<FuelPriceCreateDto>();
    };

    view! {
        <section class="entry-card">
            <h2 class="entry-card__title">"Add New Fuel Price"</h2>
            <Show when=move || loader.is_loading()>
                <div class="entry-card__hint">"Loading reference data..."</div>
            </Show>
            <form class="form form--grid" on:submit=on_submit>
                <DraftSelect vm=vm name="fuelTypeID" placeholder="Select Fuel Type" options=fuel_types />
                <DraftInput vm=vm name="price" input_type="number" step="0.01" />
                <DraftInput vm=vm name="effectiveDate" input_type="date" />
                <DraftSelect vm=vm name="supplierID" placeholder="Select Supplier" options=suppliers />
                <DraftSelect vm=vm name="townshipID" placeholder="Select Township" options=townships />
                <DraftSelect vm=vm name="siteID" placeholder="Select Site" options=sites />
                <div class="form__actions">
                    <button
                        type="submit"
                        class="btn btn-primary"
                        disabled=move || vm.is_submitting()
                    >
                        {icon("save")}
                        {move || if vm.is_submitting() { "Saving..." } else { "Add Fuel Price" }}
                    </button>
                </div>
            </form>
        </section>
    }
}
