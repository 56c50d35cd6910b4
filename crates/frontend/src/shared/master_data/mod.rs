//! Master data: the reference collections entry screens select from

pub mod batch;
pub mod loader;
pub mod resolver;

pub use batch::{BatchReport, LoadBatch};
pub use loader::MasterDataLoader;

use contracts::domain::a001_fuel_type::FuelType;
use contracts::domain::a002_supplier::Supplier;
use contracts::domain::a003_township::Township;
use contracts::domain::a004_site::Site;
use contracts::domain::a005_warehouse::Warehouse;
use contracts::domain::a006_fuel_price::FuelPrice;
use contracts::domain::common::ReferenceRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MasterCollection {
    FuelTypes,
    Suppliers,
    Townships,
    Sites,
    Warehouses,
    FuelPrices,
}

impl MasterCollection {
    /// Resource path segment of the collection
    pub fn resource(&self) -> &'static str {
        match self {
            MasterCollection::FuelTypes => FuelType::collection_name(),
            MasterCollection::Suppliers => Supplier::collection_name(),
            MasterCollection::Townships => Township::collection_name(),
            MasterCollection::Sites => Site::collection_name(),
            MasterCollection::Warehouses => Warehouse::collection_name(),
            MasterCollection::FuelPrices => "fuelprices",
        }
    }
}

/// Payload of one settled collection fetch
#[derive(Debug, Clone, PartialEq)]
pub enum CollectionData {
    FuelTypes(Vec<FuelType>),
    Suppliers(Vec<Supplier>),
    Townships(Vec<Township>),
    Sites(Vec<Site>),
    Warehouses(Vec<Warehouse>),
    FuelPrices(Vec<FuelPrice>),
}

/// Loaded collections of one screen. Unloaded or failed collections stay empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MasterDataSet {
    pub fuel_types: Vec<FuelType>,
    pub suppliers: Vec<Supplier>,
    pub townships: Vec<Township>,
    pub sites: Vec<Site>,
    pub warehouses: Vec<Warehouse>,
    pub fuel_prices: Vec<FuelPrice>,
}

impl MasterDataSet {
    pub fn apply(&mut self, data: CollectionData) {
        match data {
            CollectionData::FuelTypes(rows) => self.fuel_types = rows,
            CollectionData::Suppliers(rows) => self.suppliers = rows,
            CollectionData::Townships(rows) => self.townships = rows,
            CollectionData::Sites(rows) => self.sites = rows,
            CollectionData::Warehouses(rows) => self.warehouses = rows,
            CollectionData::FuelPrices(rows) => self.fuel_prices = rows,
        }
    }
}
