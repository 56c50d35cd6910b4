pub mod aggregate;

pub use aggregate::Township;
