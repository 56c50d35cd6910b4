use crate::shared::entity_form::{FieldKind, FieldSpec, FormSchema};
use crate::shared::master_data::MasterCollection;

pub const MASTER_DATA: &[MasterCollection] = &[
    MasterCollection::FuelTypes,
    MasterCollection::Suppliers,
    MasterCollection::Townships,
    MasterCollection::Sites,
];

pub const MASTER_DATA_ERROR: &str = "Failed to load master data for price entry.";

/// `POST /fuelprices`
pub static FUEL_PRICE_FORM: FormSchema = FormSchema {
    resource: "fuelprices",
    fields: &[
        FieldSpec::required("fuelTypeID", "Fuel Type", FieldKind::Integer),
        FieldSpec::required("price", "Price (MMK)", FieldKind::Decimal),
        FieldSpec::required("effectiveDate", "Effective Date", FieldKind::Date),
        FieldSpec::optional("supplierID", "Supplier (Optional)", FieldKind::Integer),
        FieldSpec::optional("townshipID", "Township (Optional)", FieldKind::Integer),
        FieldSpec::optional("siteID", "Site (Optional)", FieldKind::Integer),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::entity_form::{EntityFormController, FormClock};
    use contracts::domain::a006_fuel_price::FuelPriceCreateDto;
    use serde_json::json;

    #[test]
    fn test_price_entry_payload_with_nulls() {
        let mut form = EntityFormController::new(&FUEL_PRICE_FORM, FormClock::utc());
        form.set_field("fuelTypeID", "1").unwrap();
        form.set_field("price", "12.5").unwrap();
        form.set_field("effectiveDate", "2024-01-01").unwrap();
        form.set_field("supplierID", "").unwrap();

        let dto: FuelPriceCreateDto = form.begin_submit_as().unwrap();
        assert_eq!(
            serde_json::to_value(&dto).unwrap(),
            json!({
                "fuelTypeID": 1,
                "price": 12.5,
                "effectiveDate": "2024-01-01",
                "supplierID": null,
                "townshipID": null,
                "siteID": null
            })
        );
    }

    #[test]
    fn test_price_entry_requires_fuel_type() {
        let mut form = EntityFormController::new(&FUEL_PRICE_FORM, FormClock::utc());
        form.set_field("price", "12.5").unwrap();
        form.set_field("effectiveDate", "2024-01-01").unwrap();
        assert!(form.begin_submit_as::<FuelPriceCreateDto>().is_err());
        assert!(!form.is_submitting());
    }
}
