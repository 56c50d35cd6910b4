use crate::shared::api_utils::{fetch_collection, ApiError, FetchScope};
use contracts::projections::p901_price_fluctuations::PriceFluctuationDto;

/// `GET /pricefluctuations`
pub async fn fetch_fluctuations(scope: &FetchScope) -> Result<Vec<PriceFluctuationDto>, ApiError> {
    fetch_collection("pricefluctuations", scope).await
}
