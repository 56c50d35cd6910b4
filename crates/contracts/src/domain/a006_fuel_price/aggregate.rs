use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// Read model
// ============================================================================

/// Fuel price row (`GET /fuelprices`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuelPrice {
    #[serde(rename = "fuelPriceID")]
    pub fuel_price_id: i64,
    #[serde(rename = "fuelTypeID")]
    pub fuel_type_id: i64,
    pub price: f64,
    /// "YYYY-MM-DD", sometimes with a time part
    pub effective_date: String,
    #[serde(default)]
    pub supplier_name: Option<String>,
}

impl FuelPrice {
    /// Calendar date part of `effective_date`
    pub fn effective_on(&self) -> Option<NaiveDate> {
        let date_part = self.effective_date.get(..10)?;
        NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
    }

    /// Label of the price in the "Associated Fuel Price" select
    pub fn option_label(&self) -> String {
        match self.supplier_name.as_deref() {
            Some(name) if !name.is_empty() => {
                format!("{} - {:.2} MMK ({})", self.effective_date, self.price, name)
            }
            _ => format!("{} - {:.2} MMK", self.effective_date, self.price),
        }
    }
}

// ============================================================================
// Write model
// ============================================================================

/// Body of `POST /fuelprices`
///
/// Optional ids serialize as explicit `null`, never as a missing key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelPriceCreateDto {
    #[serde(rename = "fuelTypeID")]
    pub fuel_type_id: i64,
    pub price: f64,
    #[serde(rename = "effectiveDate")]
    pub effective_date: String,
    #[serde(rename = "supplierID")]
    pub supplier_id: Option<i64>,
    #[serde(rename = "townshipID")]
    pub township_id: Option<i64>,
    #[serde(rename = "siteID")]
    pub site_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_dto_keeps_null_keys() {
        let dto = FuelPriceCreateDto {
            fuel_type_id: 1,
            price: 12.5,
            effective_date: "2024-01-01".to_string(),
            supplier_id: None,
            township_id: None,
            site_id: None,
        };
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
    fn test_option_label() {
        let mut fp: FuelPrice = serde_json::from_value(json!({
            "fuelPriceID": 7,
            "fuelTypeID": 1,
            "price": 2450.0,
            "effectiveDate": "2024-03-01",
            "supplierName": "Shwe Oil"
        }))
        .unwrap();
        assert_eq!(fp.option_label(), "2024-03-01 - 2450.00 MMK (Shwe Oil)");

        fp.supplier_name = None;
        assert_eq!(fp.option_label(), "2024-03-01 - 2450.00 MMK");
    }

    #[test]
    fn test_effective_on_ignores_time_part() {
        let fp = FuelPrice {
            fuel_price_id: 1,
            fuel_type_id: 1,
            price: 1.0,
            effective_date: "2024-03-01T00:00:00".to_string(),
            supplier_name: None,
        };
        assert_eq!(fp.effective_on(), NaiveDate::from_ymd_opt(2024, 3, 1));

        let broken = FuelPrice {
            effective_date: "soon".to_string(),
            ..fp
        };
        assert_eq!(broken.effective_on(), None);
    }
}
