//! Route resolution with a straight-line fallback.
//!
//! A configured [`DirectionsProvider`] gets exactly one attempt per call. Any
//! failure (transport, timeout, bad status, unusable payload) is logged and
//! replaced by a haversine estimate tagged [`Provider::Approximate`].

use std::time::Duration;

use async_trait::async_trait;

use crate::{
    entities::{GeoPoint, Provider, RouteEstimate},
    error::Error,
    geometry::haversine_km,
};

pub const DEFAULT_AVERAGE_SPEED_KMH: f64 = 32.0;
pub const MINIMUM_DURATION_MINUTES: u32 = 5;
pub const DEFAULT_PROVIDER_TIMEOUT: Duration = Duration::from_secs(5);

#[async_trait]
pub trait DirectionsProvider: Send + Sync {
    /// Road-network route between two points, `path` in `(lat, lon)` order.
    async fn directions(
        &self,
        origin: GeoPoint,
        destination: GeoPoint,
    ) -> Result<RouteEstimate, Error>;
}

pub struct RouteResolver {
    provider: Option<Box<dyn DirectionsProvider>>,
    timeout: Duration,
    average_speed_kmh: f64,
}

impl std::fmt::Debug for RouteResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteResolver")
            .field("provider", &self.provider.is_some())
            .field("timeout", &self.timeout)
            .field("average_speed_kmh", &self.average_speed_kmh)
            .finish()
    }
}

impl Default for RouteResolver {
    fn default() -> Self {
        Self::approximate_only(DEFAULT_AVERAGE_SPEED_KMH)
    }
}

impl RouteResolver {
    pub fn new(
        provider: Box<dyn DirectionsProvider>,
        timeout: Duration,
        average_speed_kmh: f64,
    ) -> Self {
        Self {
            provider: Some(provider),
            timeout,
            average_speed_kmh,
        }
    }

    pub fn approximate_only(average_speed_kmh: f64) -> Self {
        Self {
            provider: None,
            timeout: DEFAULT_PROVIDER_TIMEOUT,
            average_speed_kmh,
        }
    }

    pub fn has_provider(&self) -> bool {
        self.provider.is_some()
    }

    pub async fn resolve(&self, origin: GeoPoint, destination: GeoPoint) -> RouteEstimate {
        let straight_km = haversine_km(origin, destination);

        let provider = match &self.provider {
            Some(provider) => provider,
            None => return self.approximate(origin, destination, straight_km),
        };

        match tokio::time::timeout(self.timeout, provider.directions(origin, destination)).await {
            Ok(Ok(mut route)) => {
                if route.path.len() < 2 {
                    route.path = vec![origin, destination];
                }

                tracing::debug!(
                    distance_km = route.distance_km,
                    straight_km,
                    "resolved route with directions provider"
                );
                return route;
            }
            Ok(Err(err)) => {
                tracing::warn!(%err, "directions provider failed, using approximate route");
            }
            Err(_) => {
                tracing::warn!(
                    timeout_ms = self.timeout.as_millis() as u64,
                    "directions provider timed out, using approximate route"
                );
            }
        }

        self.approximate(origin, destination, straight_km)
    }

    fn approximate(
        &self,
        origin: GeoPoint,
        destination: GeoPoint,
        distance_km: f64,
    ) -> RouteEstimate {
        let minutes = (distance_km / self.average_speed_kmh * 60.0).round() as u32;

        RouteEstimate {
            distance_km,
            duration_minutes: minutes.max(MINIMUM_DURATION_MINUTES),
            path: vec![origin, destination],
            provider: Provider::Approximate,
        }
    }
}
