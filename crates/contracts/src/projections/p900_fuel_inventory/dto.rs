use serde::{Deserialize, Serialize};

/// Current stock of one fuel type at one location (`GET /fuelinventory`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuelInventoryDto {
    #[serde(rename = "inventoryID")]
    pub inventory_id: i64,
    pub fuel_type_name: String,
    pub location_type: String,
    /// "Unknown" when the API cannot resolve the location
    #[serde(default)]
    pub location_name: Option<String>,
    pub current_stock: f64,
    pub last_updated: String,
}
