pub mod a006_fuel_price;
pub mod a007_fuel_transaction;
