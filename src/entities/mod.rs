mod coordinates;
mod quote;
mod route;
mod trip_options;

pub use coordinates::GeoPoint;
pub use quote::{BreakdownEntry, FareQuote, TripQuote};
pub use route::{Provider, RouteEstimate};
pub use trip_options::{BookingType, TripOptions};
