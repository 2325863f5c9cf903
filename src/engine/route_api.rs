use super::Engine;

use async_trait::async_trait;
use futures::future::join_all;

use crate::{
    api::RouteAPI,
    entities::{GeoPoint, RouteEstimate},
    error::{invalid_input_error, Error},
};

pub const MAX_BATCH_ROUTES: usize = 25;

#[async_trait]
impl RouteAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn resolve_route(
        &self,
        origin: GeoPoint,
        destination: GeoPoint,
    ) -> Result<RouteEstimate, Error> {
        origin.validate()?;
        destination.validate()?;

        let route = self.resolver.resolve(origin, destination).await;

        tracing::info!(
            provider = %route.provider,
            distance_km = route.distance_km,
            duration_minutes = route.duration_minutes,
            "resolved route"
        );

        Ok(route)
    }

    #[tracing::instrument(skip(self, pairs), fields(count = pairs.len()))]
    async fn resolve_routes(
        &self,
        pairs: Vec<(GeoPoint, GeoPoint)>,
    ) -> Result<Vec<RouteEstimate>, Error> {
        if pairs.len() > MAX_BATCH_ROUTES {
            return Err(invalid_input_error());
        }

        for (origin, destination) in &pairs {
            origin.validate()?;
            destination.validate()?;
        }

        let routes = join_all(
            pairs
                .into_iter()
                .map(|(origin, destination)| self.resolver.resolve(origin, destination)),
        )
        .await;

        Ok(routes)
    }
}
