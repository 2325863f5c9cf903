use async_trait::async_trait;

use crate::entities::{FareQuote, GeoPoint, Provider, RouteEstimate, TripOptions, TripQuote};
use crate::error::Error;

#[async_trait]
pub trait RouteAPI {
    async fn resolve_route(
        &self,
        origin: GeoPoint,
        destination: GeoPoint,
    ) -> Result<RouteEstimate, Error>;

    async fn resolve_routes(
        &self,
        pairs: Vec<(GeoPoint, GeoPoint)>,
    ) -> Result<Vec<RouteEstimate>, Error>;
}

#[async_trait]
pub trait QuoteAPI {
    async fn compute_fare(
        &self,
        distance_km: f64,
        provider: Provider,
        options: TripOptions,
    ) -> Result<FareQuote, Error>;

    async fn create_quote(
        &self,
        origin: GeoPoint,
        destination: GeoPoint,
        options: TripOptions,
    ) -> Result<TripQuote, Error>;
}

pub trait API: RouteAPI + QuoteAPI {}
