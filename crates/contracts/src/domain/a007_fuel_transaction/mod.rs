pub mod aggregate;

pub use aggregate::{FuelTransaction, FuelTransactionCreateDto};
