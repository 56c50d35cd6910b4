use crate::shared::entity_form::{FieldKind, FieldSpec, FormSchema, InitialValue, SelectOption};
use crate::shared::master_data::MasterCollection;
use contracts::domain::a006_fuel_price::FuelPrice;
use contracts::enums::{LocationType, TransactionType};

pub const MASTER_DATA: &[MasterCollection] = &[
    MasterCollection::FuelTypes,
    MasterCollection::Suppliers,
    MasterCollection::Warehouses,
    MasterCollection::Sites,
];

pub const MASTER_DATA_ERROR: &str = "Failed to load master data for transaction entry.";

/// Prices load as their own batch with their own failure message
pub const PRICE_DATA: &[MasterCollection] = &[MasterCollection::FuelPrices];

pub const PRICE_DATA_ERROR: &str = "Failed to load fuel prices.";

/// `POST /fueltransactions`
pub static FUEL_TRANSACTION_FORM: FormSchema = FormSchema {
    resource: "fueltransactions",
    fields: &[
        FieldSpec::required("transactionType", "Transaction Type", FieldKind::Text),
        FieldSpec::required("sourceLocationType", "Source Type", FieldKind::Text),
        FieldSpec::required("sourceLocationID", "Source Name", FieldKind::Integer)
            .depends_on("sourceLocationType"),
        FieldSpec::required("destinationLocationType", "Destination Type", FieldKind::Text),
        FieldSpec::required("destinationLocationID", "Destination Name", FieldKind::Integer)
            .depends_on("destinationLocationType"),
        FieldSpec::required("fuelTypeID", "Fuel Type", FieldKind::Integer),
        FieldSpec::required("quantity", "Quantity (Liters)", FieldKind::Decimal).min(0.01),
        FieldSpec::required("transactionDate", "Transaction Date & Time", FieldKind::DateTimeLocal)
            .initial(InitialValue::Now),
        FieldSpec::optional("fuelPriceID", "Associated Fuel Price (Optional)", FieldKind::Integer)
            .depends_on("fuelTypeID"),
        FieldSpec::free("transportationCost", "Transportation Cost", FieldKind::Decimal)
            .initial(InitialValue::Literal("0")),
        FieldSpec::free("loadingUnloadingCost", "Loading/Unloading Cost", FieldKind::Decimal)
            .initial(InitialValue::Literal("0")),
        FieldSpec::free("otherCost", "Other Cost", FieldKind::Decimal)
            .initial(InitialValue::Literal("0")),
        FieldSpec::free("notes", "Notes", FieldKind::Text),
    ],
};

/// Price candidates rendered as select options
pub fn price_options(candidates: &[&FuelPrice]) -> Vec<SelectOption> {
    candidates
        .iter()
        .map(|p| SelectOption::new(p.fuel_price_id.to_string(), p.option_label()))
        .collect()
}

pub fn transaction_type_options() -> Vec<SelectOption> {
    TransactionType::all()
        .into_iter()
        .map(|t| SelectOption::new(t.code(), t.display_name()))
        .collect()
}

pub fn location_type_options(types: Vec<LocationType>) -> Vec<SelectOption> {
    types
        .into_iter()
        .map(|t| SelectOption::new(t.code(), t.code()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::entity_form::{EntityFormController, FormClock};
    use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone, Utc};
    use contracts::domain::a007_fuel_transaction::FuelTransactionCreateDto;
    use serde_json::json;

    #[test]
    fn test_prices_load_in_their_own_batch() {
        use crate::shared::master_data::LoadBatch;

        assert!(!MASTER_DATA.contains(&MasterCollection::FuelPrices));
        assert_eq!(PRICE_DATA, &[MasterCollection::FuelPrices]);

        let mut reference = LoadBatch::start(MASTER_DATA);
        let mut prices = LoadBatch::start(PRICE_DATA);
        let report = prices.settle(MasterCollection::FuelPrices, false).unwrap();
        assert!(report.has_failures());
        assert!(reference.is_loading());
        assert_eq!(reference.settle(MasterCollection::FuelPrices, false), None);
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    fn yangon(_: NaiveDateTime) -> FixedOffset {
        FixedOffset::east_opt(6 * 3600 + 30 * 60).unwrap()
    }

    fn form() -> EntityFormController {
        let mut form = EntityFormController::new(
            &FUEL_TRANSACTION_FORM,
            FormClock {
                now,
                offset_at: yangon,
            },
        );
        form.set_field("transactionType", "Replenishment Process 1").unwrap();
        form.set_field("sourceLocationType", "Supplier").unwrap();
        form.set_field("sourceLocationID", "1").unwrap();
        form.set_field("destinationLocationType", "Site").unwrap();
        form.set_field("destinationLocationID", "7").unwrap();
        form.set_field("fuelTypeID", "2").unwrap();
        form.set_field("quantity", "500").unwrap();
        form.set_field("transactionDate", "2024-01-01T10:00").unwrap();
        form
    }

    #[test]
    fn test_transaction_payload() {
        let mut form = form();
        form.set_field("fuelPriceID", "9").unwrap();
        form.set_field("notes", "night delivery").unwrap();

        let dto: FuelTransactionCreateDto = form.begin_submit_as().unwrap();
        assert_eq!(dto.transaction_type, TransactionType::SupplierReplenishment);
        assert_eq!(dto.source_location_type, LocationType::Supplier);
        assert_eq!(dto.destination_location_id, 7);
        assert_eq!(dto.fuel_price_id, Some(9));
        assert_eq!(dto.transaction_date, "2024-01-01T03:30:00.000Z");
        assert_eq!(dto.transportation_cost, 0.0);

        let wire = serde_json::to_value(&dto).unwrap();
        assert_eq!(wire["transactionType"], json!("Replenishment Process 1"));
        assert_eq!(wire["quantity"], json!(500.0));
        assert_eq!(wire["notes"], json!("night delivery"));
    }

    #[test]
    fn test_new_source_type_clears_source_id() {
        let mut form = form();
        form.set_field("sourceLocationType", "Warehouse").unwrap();
        assert_eq!(form.value("sourceLocationID"), "");
        assert!(form.begin_submit_as::<FuelTransactionCreateDto>().is_err());
    }

    #[test]
    fn test_new_fuel_type_clears_price() {
        let mut form = form();
        form.set_field("fuelPriceID", "9").unwrap();
        form.set_field("fuelTypeID", "3").unwrap();
        assert_eq!(form.draft().get("fuelPriceID"), Some(&None));

        let dto: FuelTransactionCreateDto = form.begin_submit_as().unwrap();
        assert_eq!(dto.fuel_price_id, None);
    }

    #[test]
    fn test_destination_choices_exclude_supplier() {
        let options = location_type_options(LocationType::destinations());
        let values: Vec<&str> = options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["Warehouse", "Site"]);
        assert_eq!(
            transaction_type_options()[1].label,
            "Replenishment Process 2 (Warehouse to Site)"
        );
    }

    #[test]
    fn test_defaults() {
        let form = EntityFormController::new(
            &FUEL_TRANSACTION_FORM,
            FormClock {
                now,
                offset_at: yangon,
            },
        );
        assert_eq!(form.value("transactionDate"), "2024-01-01T06:30");
        assert_eq!(form.value("otherCost"), "0");
        assert_eq!(form.value("notes"), "");
    }
}
