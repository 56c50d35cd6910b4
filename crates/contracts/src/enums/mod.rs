pub mod fluctuation_type;
pub mod location_type;
pub mod transaction_type;

pub use fluctuation_type::FluctuationType;
pub use location_type::LocationType;
pub use transaction_type::TransactionType;
