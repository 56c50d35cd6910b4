//! Option lists that depend on other field values

use super::MasterDataSet;
use contracts::domain::a006_fuel_price::FuelPrice;
use contracts::domain::common::{ReferenceOption, ReferenceRecord};
use contracts::enums::LocationType;

/// Project a reference collection to select options
pub fn project<R: ReferenceRecord>(records: &[R]) -> Vec<ReferenceOption> {
    records.iter().map(ReferenceRecord::to_option).collect()
}

/// Source location candidates for a location-type discriminator
///
/// Unset or unrecognised discriminators yield no candidates.
pub fn resolve_sources(discriminator: &str, data: &MasterDataSet) -> Vec<ReferenceOption> {
    match LocationType::from_code(discriminator) {
        Some(location_type) => options_for(location_type, data),
        None => Vec::new(),
    }
}

/// Destination location candidates; suppliers are never destinations
pub fn resolve_destinations(discriminator: &str, data: &MasterDataSet) -> Vec<ReferenceOption> {
    match LocationType::from_code(discriminator) {
        Some(location_type) if location_type.is_destination() => options_for(location_type, data),
        _ => Vec::new(),
    }
}

fn options_for(location_type: LocationType, data: &MasterDataSet) -> Vec<ReferenceOption> {
    match location_type {
        LocationType::Supplier => project(&data.suppliers),
        LocationType::Warehouse => project(&data.warehouses),
        LocationType::Site => project(&data.sites),
    }
}

/// Prices of the selected fuel type, most recent effective date first
///
/// An unset or non-numeric fuel type yields no candidates.
pub fn fuel_price_candidates<'a>(fuel_type: &str, prices: &'a [FuelPrice]) -> Vec<&'a FuelPrice> {
    let Ok(fuel_type_id) = fuel_type.trim().parse::<i64>() else {
        return Vec::new();
    };

    let mut candidates: Vec<&FuelPrice> = prices
        .iter()
        .filter(|p| p.fuel_type_id == fuel_type_id)
        .collect();
    candidates.sort_by(|a, b| {
        b.effective_on()
            .cmp(&a.effective_on())
            .then_with(|| b.effective_date.cmp(&a.effective_date))
    });
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_supplier::Supplier;
    use contracts::domain::a004_site::Site;
    use contracts::domain::a005_warehouse::Warehouse;
    use serde_json::json;

    fn sample() -> MasterDataSet {
        MasterDataSet {
            suppliers: vec![serde_json::from_value::<Supplier>(
                json!({"supplierID": 1, "supplierName": "Shwe Oil"}),
            )
            .unwrap()],
            warehouses: vec![serde_json::from_value::<Warehouse>(
                json!({"warehouseID": 3, "warehouseName": "Yangon WH"}),
            )
            .unwrap()],
            sites: vec![
                serde_json::from_value::<Site>(json!({"siteID": 7, "siteName": "Tower A"})).unwrap(),
                serde_json::from_value::<Site>(json!({"siteID": 8, "siteName": "Tower B"})).unwrap(),
            ],
            ..Default::default()
        }
    }

    fn price(id: i64, fuel_type_id: i64, date: &str) -> FuelPrice {
        FuelPrice {
            fuel_price_id: id,
            fuel_type_id,
            price: 1000.0,
            effective_date: date.to_string(),
            supplier_name: None,
        }
    }

    #[test]
    fn test_resolve_sources_by_type() {
        let data = sample();
        assert_eq!(
            resolve_sources("Supplier", &data),
            vec![ReferenceOption::new(1, "Shwe Oil")]
        );
        assert_eq!(resolve_sources("Site", &data).len(), 2);
        assert!(resolve_sources("", &data).is_empty());
        assert!(resolve_sources("Depot", &data).is_empty());
    }

    #[test]
    fn test_supplier_is_never_a_destination() {
        let data = sample();
        assert!(resolve_destinations("Supplier", &data).is_empty());
        assert_eq!(
            resolve_destinations("Warehouse", &data),
            vec![ReferenceOption::new(3, "Yangon WH")]
        );
    }

    #[test]
    fn test_fuel_price_candidates_sorted_desc() {
        let prices = vec![
            price(1, 1, "2024-01-01"),
            price(2, 2, "2024-06-01"),
            price(3, 1, "2024-03-01"),
            price(4, 1, "not a date"),
        ];
        let ids: Vec<i64> = fuel_price_candidates("1", &prices)
            .iter()
            .map(|p| p.fuel_price_id)
            .collect();
        assert_eq!(ids, vec![3, 1, 4]);
    }

    #[test]
    fn test_fuel_price_candidates_unset() {
        let prices = vec![price(1, 1, "2024-01-01")];
        assert!(fuel_price_candidates("", &prices).is_empty());
        assert!(fuel_price_candidates("diesel", &prices).is_empty());
    }
}
