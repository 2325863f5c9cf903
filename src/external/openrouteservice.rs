use std::time::Duration;

use async_trait::async_trait;
use geo_types::{LineString, MultiLineString, Point};
use serde::Deserialize;
use serde_json::json;

use crate::{
    entities::{GeoPoint, Provider, RouteEstimate},
    error::{upstream_error, Error},
    geometry::haversine_km,
    routing::DirectionsProvider,
};

pub const DEFAULT_API_BASE: &str = "https://api.openrouteservice.org";
const DIRECTIONS_PATH: &str = "/v2/directions/driving-car/geojson";

#[derive(Debug, Deserialize)]
struct DirectionsResponse {
    #[serde(default)]
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    geometry: Option<Geometry>,
    properties: Option<Properties>,
}

#[derive(Debug, Deserialize)]
struct Properties {
    summary: Option<Summary>,
}

// zero-length routes come back with an empty summary object
#[derive(Debug, Deserialize)]
struct Summary {
    distance: Option<f64>,
    duration: Option<f64>,
}

/// Below this straight-line separation an empty summary is a zero-length route.
const ZERO_LENGTH_KM: f64 = 0.001;

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
enum Geometry {
    LineString { coordinates: Vec<Vec<f64>> },
    MultiLineString { coordinates: Vec<Vec<Vec<f64>>> },
    #[serde(other)]
    Unsupported,
}

impl From<Geometry> for MultiLineString<f64> {
    fn from(geometry: Geometry) -> Self {
        match geometry {
            Geometry::LineString { coordinates } => MultiLineString(vec![line(coordinates)]),
            Geometry::MultiLineString { coordinates } => {
                MultiLineString(coordinates.into_iter().map(line).collect())
            }
            Geometry::Unsupported => MultiLineString(vec![]),
        }
    }
}

fn line(positions: Vec<Vec<f64>>) -> LineString<f64> {
    positions
        .into_iter()
        .filter_map(|position| match position[..] {
            [x, y, ..] => Some((x, y)),
            _ => None,
        })
        .collect::<Vec<_>>()
        .into()
}

/// ORS positions are `[longitude, latitude]`.
fn lon_lat(point: GeoPoint) -> [f64; 2] {
    [point.longitude, point.latitude]
}

/// Flattens the segments, in traversal order, into `GeoPoint`s.
fn path_from_lines(lines: MultiLineString<f64>) -> Vec<GeoPoint> {
    lines
        .0
        .into_iter()
        .flat_map(|line| line.0)
        .map(|coordinate| GeoPoint::from(Point::from(coordinate)))
        .collect()
}

#[derive(Clone, Debug)]
pub struct OpenRouteService {
    client: reqwest::Client,
    api_base: String,
    api_key: String,
}

impl OpenRouteService {
    pub fn new(api_base: String, api_key: String, timeout: Duration) -> Result<Self, Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            api_base: api_base.trim_end_matches('/').into(),
            api_key,
        })
    }

    fn estimate_from(
        data: DirectionsResponse,
        origin: GeoPoint,
        destination: GeoPoint,
    ) -> Result<RouteEstimate, Error> {
        let feature = data
            .features
            .into_iter()
            .next()
            .ok_or_else(|| upstream_error())?;

        let summary = feature
            .properties
            .and_then(|properties| properties.summary)
            .ok_or_else(|| upstream_error())?;

        let (distance, duration) = match (summary.distance, summary.duration) {
            (Some(distance), Some(duration)) if distance.is_finite() && duration.is_finite() => {
                (distance, duration)
            }
            (None, None) if haversine_km(origin, destination) < ZERO_LENGTH_KM => (0.0, 0.0),
            _ => return Err(upstream_error()),
        };

        let path = feature
            .geometry
            .map(|geometry| path_from_lines(geometry.into()))
            .unwrap_or_default();

        Ok(RouteEstimate {
            distance_km: distance.max(0.0) / 1000.0,
            duration_minutes: (duration.max(0.0) / 60.0).round() as u32,
            path,
            provider: Provider::External,
        })
    }
}

#[async_trait]
impl DirectionsProvider for OpenRouteService {
    #[tracing::instrument(skip(self))]
    async fn directions(
        &self,
        origin: GeoPoint,
        destination: GeoPoint,
    ) -> Result<RouteEstimate, Error> {
        let url = format!("{}{}", self.api_base, DIRECTIONS_PATH);
        let body = json!({ "coordinates": [lon_lat(origin), lon_lat(destination)] });

        let res = self
            .client
            .post(url)
            .header("Authorization", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = res.status();

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "directions request rejected");
            return Err(upstream_error());
        }

        let text = res.text().await?;
        let data: DirectionsResponse = serde_json::from_str(&text)?;

        Self::estimate_from(data, origin, destination)
    }
}
