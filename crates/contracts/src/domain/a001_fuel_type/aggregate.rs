use crate::domain::common::ReferenceRecord;
use serde::{Deserialize, Serialize};

/// Fuel type reference record (`GET /fueltypes`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelType {
    #[serde(rename = "fuelTypeID")]
    pub fuel_type_id: i64,
    #[serde(rename = "fuelTypeName")]
    pub fuel_type_name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl ReferenceRecord for FuelType {
    fn id(&self) -> i64 {
        self.fuel_type_id
    }

    fn display_name(&self) -> &str {
        &self.fuel_type_name
    }

    fn collection_name() -> &'static str {
        "fueltypes"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_without_description() {
        let ft: FuelType =
            serde_json::from_str(r#"{"fuelTypeID": 1, "fuelTypeName": "Diesel"}"#).unwrap();
        assert_eq!(ft.id(), 1);
        assert_eq!(ft.display_name(), "Diesel");
        assert!(ft.description.is_none());
    }
}
