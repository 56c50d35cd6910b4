use crate::shared::api_utils::{fetch_collection, ApiError, FetchScope};
use contracts::domain::a007_fuel_transaction::FuelTransaction;

/// `GET /fueltransactions`
pub async fn fetch_transactions(scope: &FetchScope) -> Result<Vec<FuelTransaction>, ApiError> {
    fetch_collection("fueltransactions", scope).await
}
