use crate::enums::FluctuationType;
use serde::{Deserialize, Serialize};

/// Price change recorded when a fuel price is added (`GET /pricefluctuations`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceFluctuationDto {
    #[serde(rename = "fluctuationID")]
    pub fluctuation_id: i64,
    pub fuel_type_name: String,
    pub fluctuation_date: String,
    pub current_price: f64,
    #[serde(default)]
    pub previous_price: Option<f64>,
    #[serde(default)]
    pub fluctuation_amount: Option<f64>,
    #[serde(default)]
    pub fluctuation_type: FluctuationType,
    #[serde(default)]
    pub notes: Option<String>,
}

impl PriceFluctuationDto {
    /// Change column of the dashboard: "amount (type)" or "-"
    pub fn change_label(&self) -> String {
        match self.fluctuation_amount {
            Some(amount) if amount != 0.0 => {
                format!("{:.2} ({})", amount, self.fluctuation_type.label())
            }
            _ => "-".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_change_label() {
        let mut f: PriceFluctuationDto = serde_json::from_value(json!({
            "fluctuationID": 1,
            "fuelTypeName": "Octane 92",
            "fluctuationDate": "2024-03-01",
            "currentPrice": 2500.0,
            "previousPrice": 2450.0,
            "fluctuationAmount": 50.0,
            "fluctuationType": "Increase",
            "notes": null
        }))
        .unwrap();
        assert_eq!(f.change_label(), "50.00 (Increase)");

        f.fluctuation_amount = None;
        assert_eq!(f.change_label(), "-");
    }
}
