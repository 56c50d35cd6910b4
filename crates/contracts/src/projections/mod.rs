pub mod p900_fuel_inventory;
pub mod p901_price_fluctuations;
