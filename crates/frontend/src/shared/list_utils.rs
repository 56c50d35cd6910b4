//! Shared helpers for report lists: row filtering and list loading

use crate::shared::api_utils::ApiError;
use crate::shared::notification::Notifier;
use contracts::domain::a007_fuel_transaction::FuelTransaction;
use contracts::projections::p900_fuel_inventory::FuelInventoryDto;
use contracts::projections::p901_price_fluctuations::PriceFluctuationDto;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::BTreeSet;
use std::future::Future;

/// Rows that belong to a fuel type
pub trait FuelTypeScoped {
    fn fuel_type_name(&self) -> &str;
}

impl FuelTypeScoped for FuelInventoryDto {
    fn fuel_type_name(&self) -> &str {
        &self.fuel_type_name
    }
}

impl FuelTypeScoped for FuelTransaction {
    fn fuel_type_name(&self) -> &str {
        &self.fuel_type_name
    }
}

impl FuelTypeScoped for PriceFluctuationDto {
    fn fuel_type_name(&self) -> &str {
        &self.fuel_type_name
    }
}

/// Keep rows of `fuel_type`; an empty filter keeps everything
pub fn filter_by_fuel_type<T: FuelTypeScoped + Clone>(rows: &[T], fuel_type: &str) -> Vec<T> {
    if fuel_type.is_empty() {
        return rows.to_vec();
    }
    rows.iter()
        .filter(|r| r.fuel_type_name() == fuel_type)
        .cloned()
        .collect()
}

/// Distinct fuel type names, sorted
pub fn fuel_type_names<'a>(names: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    names
        .into_iter()
        .filter(|n| !n.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Fetch a list into `target`; a failure publishes `failure_message`
///
/// Cancelled fetches leave `target` untouched and stay silent.
pub fn load_list<T, Fut>(
    target: RwSignal<Vec<T>>,
    fetch: Fut,
    failure_message: &'static str,
    notifier: Notifier,
) where
    T: Send + Sync + 'static,
    Fut: Future<Output = Result<Vec<T>, ApiError>> + 'static,
{
    spawn_local(async move {
        match fetch.await {
            Ok(rows) => {
                target.try_set(rows);
            }
            Err(e) if e.is_cancelled() => {}
            Err(e) => {
                log::error!("{}", e);
                notifier.error(failure_message);
            }
        }
    });
}
