mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::Extension,
    routing::{get, post},
    Router,
};

use crate::api::API;
use crate::error::{unexpected_error, Error};
use crate::server::handlers::{directions, fares, quotes};

pub(crate) type DynAPI = Arc<dyn API + Send + Sync>;

pub fn router<T: API + Sync + Send + 'static>(api: T) -> Router {
    let api = Arc::new(api) as DynAPI;

    Router::new()
        .route("/", get(root))
        .route("/directions", post(directions::create))
        .route("/directions/batch", post(directions::create_batch))
        .route("/fares", post(fares::create))
        .route("/quotes", post(quotes::create))
        .layer(Extension(api))
}

pub async fn serve<T: API + Sync + Send + 'static>(api: T, addr: SocketAddr) -> Result<(), Error> {
    let app = router(api);

    let server = axum::Server::try_bind(&addr).map_err(|err| {
        tracing::error!(%err, "failed to bind {}", addr);
        unexpected_error()
    })?;

    tracing::info!("listening on {}", addr);

    server
        .serve(app.into_make_service())
        .await
        .map_err(|err| {
            tracing::error!(%err, "server stopped");
            unexpected_error()
        })
}

async fn root() -> &'static str {
    "kombi route and fare service"
}
