use crate::shared::api_utils::{fetch_collection, ApiError, FetchScope};
use contracts::projections::p900_fuel_inventory::FuelInventoryDto;

/// `GET /fuelinventory`
pub async fn fetch_inventory(scope: &FetchScope) -> Result<Vec<FuelInventoryDto>, ApiError> {
    fetch_collection("fuelinventory", scope).await
}
