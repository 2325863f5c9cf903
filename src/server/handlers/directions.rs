use axum::extract::{Extension, Json};
use axum_macros::debug_handler;
use serde::{Deserialize, Serialize};

use crate::entities::{GeoPoint, RouteEstimate};
use crate::error::Error;
use crate::server::DynAPI;

/// Points arrive as `[latitude, longitude]` pairs.
#[derive(Serialize, Deserialize)]
pub struct CreateParams {
    #[serde(default)]
    from: Vec<f64>,
    #[serde(default)]
    to: Vec<f64>,
}

impl CreateParams {
    pub fn points(&self) -> Result<(GeoPoint, GeoPoint), Error> {
        let origin = GeoPoint::try_from(self.from.as_slice())?;
        let destination = GeoPoint::try_from(self.to.as_slice())?;

        Ok((origin, destination))
    }
}

#[derive(Serialize, Deserialize)]
pub struct CreateBatchParams {
    routes: Vec<CreateParams>,
}

#[debug_handler]
pub async fn create(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<CreateParams>,
) -> Result<Json<RouteEstimate>, Error> {
    let (origin, destination) = params.points()?;
    let route = api.resolve_route(origin, destination).await?;

    Ok(route.into())
}

#[debug_handler]
pub async fn create_batch(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<CreateBatchParams>,
) -> Result<Json<Vec<RouteEstimate>>, Error> {
    let pairs = params
        .routes
        .iter()
        .map(CreateParams::points)
        .collect::<Result<Vec<_>, Error>>()?;

    let routes = api.resolve_routes(pairs).await?;

    Ok(routes.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::engine::Engine;
    use crate::entities::Provider;
    use crate::fares::FareSchedule;
    use crate::routing::RouteResolver;
    use tokio_test::block_on;

    fn api() -> DynAPI {
        Arc::new(Engine::with_resolver(
            RouteResolver::default(),
            FareSchedule::default(),
        ))
    }

    #[test]
    fn resolves_lat_lon_pairs() {
        let params = CreateParams {
            from: vec![-26.2041, 28.0473],
            to: vec![-26.1076, 28.0567],
        };

        let Json(route) = block_on(create(Extension(api()), Json(params))).unwrap();

        assert_eq!(route.provider, Provider::Approximate);
        assert_eq!(route.path[0], GeoPoint::new(-26.2041, 28.0473).unwrap());
        assert_eq!(route.path[1], GeoPoint::new(-26.1076, 28.0567).unwrap());
    }

    #[test]
    fn wrong_arity_is_invalid_input() {
        let params: CreateParams =
            serde_json::from_str(r#"{"from": [-26.2041], "to": [-26.1076, 28.0567]}"#).unwrap();

        let err = block_on(create(Extension(api()), Json(params))).unwrap_err();
        assert!(err.is_invalid_input());

        let params: CreateParams = serde_json::from_str(r#"{"to": [-26.1076, 28.0567]}"#).unwrap();
        assert!(block_on(create(Extension(api()), Json(params))).is_err());
    }

    #[test]
    fn batch_rejects_any_bad_pair() {
        let params: CreateBatchParams = serde_json::from_str(
            r#"{"routes": [
                {"from": [-26.2041, 28.0473], "to": [-26.1076, 28.0567]},
                {"from": [-26.2041, 28.0473], "to": [-26.1076, 228.0]}
            ]}"#,
        )
        .unwrap();

        assert!(block_on(create_batch(Extension(api()), Json(params))).is_err());
    }
}
