mod quote_api;
mod route_api;

use crate::{
    api::API,
    config::Config,
    error::Error,
    external::OpenRouteService,
    fares::FareSchedule,
    routing::RouteResolver,
};

#[derive(Debug)]
pub struct Engine {
    resolver: RouteResolver,
    fares: FareSchedule,
}

impl Engine {
    #[tracing::instrument(name = "Engine::new", skip_all)]
    pub fn new(config: &Config) -> Result<Self, Error> {
        let routing = &config.routing;

        let resolver = match &routing.api_key {
            Some(api_key) => {
                tracing::info!(api_base = %routing.api_base, "directions provider enabled");

                let provider =
                    OpenRouteService::new(routing.api_base.clone(), api_key.clone(), routing.timeout)?;

                RouteResolver::new(Box::new(provider), routing.timeout, routing.average_speed_kmh)
            }
            None => {
                tracing::warn!("no directions provider key configured, routes will be approximate");
                RouteResolver::approximate_only(routing.average_speed_kmh)
            }
        };

        Ok(Self::with_resolver(resolver, config.fares))
    }

    pub fn with_resolver(resolver: RouteResolver, fares: FareSchedule) -> Self {
        Self { resolver, fares }
    }
}

impl API for Engine {}

#[test]
fn new_engine_without_key_is_approximate_only() {
    let engine = Engine::new(&Config::default()).unwrap();

    assert!(!engine.resolver.has_provider());
}

#[test]
fn new_engine_with_key_uses_provider() {
    let mut config = Config::default();
    config.routing.api_key = Some("5b3ce3597851110001cf6248".into());

    let engine = Engine::new(&config).unwrap();

    assert!(engine.resolver.has_provider());
}
