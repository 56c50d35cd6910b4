pub mod aggregate;

pub use aggregate::FuelType;
