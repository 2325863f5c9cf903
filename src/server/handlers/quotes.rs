use axum::extract::{Extension, Json};
use axum_macros::debug_handler;
use serde::{Deserialize, Serialize};

use crate::entities::{TripOptions, TripQuote};
use crate::error::Error;
use crate::server::handlers::directions;
use crate::server::DynAPI;

#[derive(Serialize, Deserialize)]
pub struct CreateParams {
    #[serde(flatten)]
    points: directions::CreateParams,
    options: TripOptions,
}

#[derive(Debug, Serialize)]
pub struct QuoteView {
    #[serde(flatten)]
    pub quote: TripQuote,
    pub breakdown: Vec<String>,
}

#[debug_handler]
pub async fn create(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<CreateParams>,
) -> Result<Json<QuoteView>, Error> {
    let (origin, destination) = params.points.points()?;
    let quote = api.create_quote(origin, destination, params.options).await?;

    Ok(Json(QuoteView {
        breakdown: quote.fare.breakdown_lines(),
        quote,
    }))
}
