pub mod aggregate;

pub use aggregate::{FuelPrice, FuelPriceCreateDto};
