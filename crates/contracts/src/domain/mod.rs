pub mod a001_fuel_type;
pub mod a002_supplier;
pub mod a003_township;
pub mod a004_site;
pub mod a005_warehouse;
pub mod a006_fuel_price;
pub mod a007_fuel_transaction;
pub mod common;
