use super::{BatchReport, CollectionData, LoadBatch, MasterCollection, MasterDataSet};
use crate::shared::api_utils::{fetch_collection, ApiError, FetchScope};
use crate::shared::notification::Notifier;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Loads a screen's master data concurrently
///
/// Collections that load are applied as they arrive; failed ones stay empty.
/// When the batch completes with failures, one error notification is
/// published. Results arriving after the owning component unmounted are
/// dropped.
#[derive(Clone, Copy)]
pub struct MasterDataLoader {
    pub data: RwSignal<MasterDataSet>,
    pub batch: RwSignal<LoadBatch>,
}

impl MasterDataLoader {
    pub fn new() -> Self {
        Self {
            data: RwSignal::new(MasterDataSet::default()),
            batch: RwSignal::new(LoadBatch::default()),
        }
    }

    /// Start loading; call from a component body
    pub fn load(
        &self,
        collections: &'static [MasterCollection],
        failure_message: &'static str,
        notifier: Notifier,
    ) {
        let scope = FetchScope::for_component();
        self.batch.set(LoadBatch::start(collections));

        for &collection in collections {
            let data = self.data;
            let batch = self.batch;
            let scope = scope.clone();
            spawn_local(async move {
                let outcome = fetch_master(collection, &scope).await;
                if matches!(&outcome, Err(e) if e.is_cancelled()) {
                    return;
                }

                let (Some(mut set), Some(mut state)) =
                    (data.try_get_untracked(), batch.try_get_untracked())
                else {
                    return;
                };
                let report = settle_outcome(&mut set, &mut state, collection, outcome);
                data.try_set(set);
                batch.try_set(state);

                if let Some(report) = report.filter(BatchReport::has_failures) {
                    log::warn!("master data incomplete, failed: {:?}", report.failed);
                    notifier.error(failure_message);
                }
            });
        }
    }

    pub fn is_loading(&self) -> bool {
        self.batch.with(LoadBatch::is_loading)
    }
}

impl Default for MasterDataLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Apply one fetch outcome and record it in the batch
///
/// Returns the batch report once the last collection has settled.
pub fn settle_outcome(
    data: &mut MasterDataSet,
    batch: &mut LoadBatch,
    collection: MasterCollection,
    outcome: Result<CollectionData, ApiError>,
) -> Option<BatchReport> {
    let ok = match outcome {
        Ok(payload) => {
            data.apply(payload);
            true
        }
        Err(e) => {
            log::error!("master data: {}", e);
            false
        }
    };
    batch.settle(collection, ok)
}

async fn fetch_master(
    collection: MasterCollection,
    scope: &FetchScope,
) -> Result<CollectionData, ApiError> {
    let resource = collection.resource();
    let data = match collection {
        MasterCollection::FuelTypes => {
            CollectionData::FuelTypes(fetch_collection(resource, scope).await?)
        }
        MasterCollection::Suppliers => {
            CollectionData::Suppliers(fetch_collection(resource, scope).await?)
        }
        MasterCollection::Townships => {
            CollectionData::Townships(fetch_collection(resource, scope).await?)
        }
        MasterCollection::Sites => CollectionData::Sites(fetch_collection(resource, scope).await?),
        MasterCollection::Warehouses => {
            CollectionData::Warehouses(fetch_collection(resource, scope).await?)
        }
        MasterCollection::FuelPrices => {
            CollectionData::FuelPrices(fetch_collection(resource, scope).await?)
        }
    };
    log::debug!("master data: /{} loaded", resource);
    Ok(data)
}
