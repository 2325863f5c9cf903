use super::Engine;

use async_trait::async_trait;

use crate::{
    api::{QuoteAPI, RouteAPI},
    entities::{FareQuote, GeoPoint, Provider, TripOptions, TripQuote},
    error::Error,
};

#[async_trait]
impl QuoteAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn compute_fare(
        &self,
        distance_km: f64,
        provider: Provider,
        options: TripOptions,
    ) -> Result<FareQuote, Error> {
        Ok(self.fares.compute_fare(distance_km, provider, &options))
    }

    #[tracing::instrument(skip(self))]
    async fn create_quote(
        &self,
        origin: GeoPoint,
        destination: GeoPoint,
        options: TripOptions,
    ) -> Result<TripQuote, Error> {
        let route = self.resolve_route(origin, destination).await?;
        let fare = self
            .fares
            .compute_fare(route.distance_km, route.provider, &options);

        let quote = TripQuote::new(route, options, fare);

        tracing::info!(
            token = %quote.token,
            amount = quote.fare.amount,
            provider = %quote.route.provider,
            "created quote"
        );

        Ok(quote)
    }
}

#[test]
fn quote_for_shared_trip() {
    use crate::entities::BreakdownEntry;
    use crate::fares::FareSchedule;
    use crate::routing::RouteResolver;
    use tokio_test::block_on;

    let engine = Engine::with_resolver(RouteResolver::default(), FareSchedule::default());
    let origin = GeoPoint::new(-26.2041, 28.0473).unwrap();
    let destination = GeoPoint::new(-26.1076, 28.0567).unwrap();

    let quote = block_on(engine.create_quote(origin, destination, TripOptions::shared(2))).unwrap();

    let expected = ((10.0 + quote.route.distance_km * 3.5) / 2.0).round() as i64;
    assert_eq!(quote.fare.amount, expected);
    assert_eq!(
        quote.fare.breakdown.last(),
        Some(&BreakdownEntry::RouteSource {
            provider: Provider::Approximate
        })
    );
}

#[test]
fn fare_for_documented_examples() {
    use crate::fares::FareSchedule;
    use crate::routing::RouteResolver;
    use tokio_test::block_on;

    let engine = Engine::with_resolver(RouteResolver::default(), FareSchedule::default());

    let fare = block_on(engine.compute_fare(10.0, Provider::External, TripOptions::shared(2))).unwrap();
    assert_eq!(fare.amount, 23);

    let fare = block_on(engine.compute_fare(
        10.0,
        Provider::External,
        TripOptions::shared(2).scheduled(),
    ))
    .unwrap();
    assert_eq!(fare.amount, 25);
}

#[test]
fn unusable_distance_is_priced_as_zero() {
    use crate::fares::FareSchedule;
    use crate::routing::RouteResolver;
    use tokio_test::block_on;

    let engine = Engine::with_resolver(RouteResolver::default(), FareSchedule::default());

    for distance_km in [-1.0, f64::NAN, f64::INFINITY] {
        let fare = block_on(engine.compute_fare(distance_km, Provider::Approximate, TripOptions::private()))
            .unwrap();
        assert_eq!(fare.amount, 18, "{}", distance_km);
    }
}
