pub mod dto;

pub use dto::PriceFluctuationDto;
