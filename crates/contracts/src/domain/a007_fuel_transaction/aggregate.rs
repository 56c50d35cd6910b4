use crate::enums::{LocationType, TransactionType};
use serde::{Deserialize, Serialize};

// ============================================================================
// Read model
// ============================================================================

/// Recorded fuel movement (`GET /fueltransactions`)
///
/// Location names are resolved by the API and may be missing for
/// locations that were deleted since.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuelTransaction {
    #[serde(rename = "transactionID")]
    pub transaction_id: i64,
    #[serde(rename = "usageTransitionID")]
    pub usage_transition_id: String,
    pub transaction_type: String,
    pub source_location_type: String,
    #[serde(default)]
    pub source_location_name: Option<String>,
    pub destination_location_type: String,
    #[serde(default)]
    pub destination_location_name: Option<String>,
    pub fuel_type_name: String,
    pub quantity: f64,
    pub transaction_date: String,
    #[serde(default)]
    pub fuel_price_per_unit: Option<f64>,
    #[serde(default)]
    pub transportation_cost: Option<f64>,
    #[serde(default)]
    pub loading_unloading_cost: Option<f64>,
    #[serde(default)]
    pub other_cost: Option<f64>,
    #[serde(default)]
    pub total_cost: Option<f64>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl FuelTransaction {
    /// First 8 characters of the usage transition id, as shown in tables
    pub fn short_id(&self) -> String {
        let head: String = self.usage_transition_id.chars().take(8).collect();
        format!("{}...", head)
    }

    pub fn source_label(&self) -> String {
        format!(
            "{} ({})",
            self.source_location_name.as_deref().unwrap_or("N/A"),
            self.source_location_type
        )
    }

    pub fn destination_label(&self) -> String {
        format!(
            "{} ({})",
            self.destination_location_name.as_deref().unwrap_or("N/A"),
            self.destination_location_type
        )
    }
}

// ============================================================================
// Write model
// ============================================================================

/// Body of `POST /fueltransactions`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelTransactionCreateDto {
    #[serde(rename = "transactionType")]
    pub transaction_type: TransactionType,
    #[serde(rename = "sourceLocationType")]
    pub source_location_type: LocationType,
    #[serde(rename = "sourceLocationID")]
    pub source_location_id: i64,
    #[serde(rename = "destinationLocationType")]
    pub destination_location_type: LocationType,
    #[serde(rename = "destinationLocationID")]
    pub destination_location_id: i64,
    #[serde(rename = "fuelTypeID")]
    pub fuel_type_id: i64,
    pub quantity: f64,
    /// ISO-8601 UTC timestamp, e.g. "2024-05-01T08:30:00.000Z"
    #[serde(rename = "transactionDate")]
    pub transaction_date: String,
    #[serde(rename = "fuelPriceID")]
    pub fuel_price_id: Option<i64>,
    #[serde(rename = "transportationCost")]
    pub transportation_cost: f64,
    #[serde(rename = "loadingUnloadingCost")]
    pub loading_unloading_cost: f64,
    #[serde(rename = "otherCost")]
    pub other_cost: f64,
    pub notes: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_read_model_tolerates_nulls() {
        let t: FuelTransaction = serde_json::from_value(json!({
            "transactionID": 12,
            "usageTransitionID": "TRANS-3f2a9c1e-0000",
            "transactionType": "Replenishment Process 2",
            "sourceLocationType": "Warehouse",
            "sourceLocationName": "WH-A",
            "destinationLocationType": "Site",
            "destinationLocationName": null,
            "fuelTypeName": "Diesel",
            "quantity": 150.0,
            "transactionDate": "2024-05-01T08:30:00",
            "fuelPricePerUnit": null,
            "transportationCost": 0.0,
            "loadingUnloadingCost": 0.0,
            "otherCost": 0.0,
            "totalCost": null,
            "notes": null
        }))
        .unwrap();

        assert_eq!(t.short_id(), "TRANS-3f...");
        assert_eq!(t.source_label(), "WH-A (Warehouse)");
        assert_eq!(t.destination_label(), "N/A (Site)");
        assert_eq!(t.total_cost, None);
    }

    #[test]
    fn test_create_dto_rejects_unknown_location_type() {
        let result = serde_json::from_value::<FuelTransactionCreateDto>(json!({
            "transactionType": "Fuel Transfer Process",
            "sourceLocationType": "Depot",
            "sourceLocationID": 1,
            "destinationLocationType": "Site",
            "destinationLocationID": 2,
            "fuelTypeID": 1,
            "quantity": 10.0,
            "transactionDate": "2024-05-01T08:30:00.000Z",
            "fuelPriceID": null,
            "transportationCost": 0.0,
            "loadingUnloadingCost": 0.0,
            "otherCost": 0.0,
            "notes": ""
        }));
        assert!(result.is_err());
    }
}
