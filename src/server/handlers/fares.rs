use axum::extract::{Extension, Json};
use axum_macros::debug_handler;
use serde::{Deserialize, Serialize};

use crate::entities::{BreakdownEntry, FareQuote, Provider, TripOptions};
use crate::error::Error;
use crate::server::DynAPI;

#[derive(Serialize, Deserialize)]
pub struct CreateParams {
    distance_km: f64,
    provider: Provider,
    options: TripOptions,
}

/// Fare with its breakdown rendered for display.
#[derive(Debug, Serialize, Deserialize)]
pub struct FareView {
    pub amount: i64,
    pub breakdown: Vec<String>,
    pub entries: Vec<BreakdownEntry>,
}

impl From<FareQuote> for FareView {
    fn from(fare: FareQuote) -> Self {
        Self {
            amount: fare.amount,
            breakdown: fare.breakdown_lines(),
            entries: fare.breakdown,
        }
    }
}

#[debug_handler]
pub async fn create(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<CreateParams>,
) -> Result<Json<FareView>, Error> {
    let fare = api
        .compute_fare(params.distance_km, params.provider, params.options)
        .await?;

    Ok(Json(fare.into()))
}
