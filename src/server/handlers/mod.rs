pub mod directions;
pub mod fares;
pub mod quotes;
