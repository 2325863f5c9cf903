//! Distance-based minibus fares.
//!
//! The modifiers are applied in a fixed order: base and distance, private
//! multiplier, scheduling fee, then the per-passenger split for shared
//! bookings. The split only changes the displayed amount.

use serde::{Deserialize, Serialize};

use crate::entities::{BookingType, BreakdownEntry, FareQuote, Provider, TripOptions};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FareSchedule {
    pub base: f64,
    pub per_km: f64,
    pub private_multiplier: f64,
    pub scheduling_fee: f64,
}

impl Default for FareSchedule {
    fn default() -> Self {
        Self {
            base: 10.0,
            per_km: 3.5,
            private_multiplier: 1.8,
            scheduling_fee: 5.0,
        }
    }
}

impl FareSchedule {
    /// Subtotal before the shared split, with the breakdown entries that built it.
    fn subtotal(&self, distance_km: f64, options: &TripOptions) -> (f64, Vec<BreakdownEntry>) {
        let distance_km = if distance_km.is_finite() {
            distance_km.max(0.0)
        } else {
            0.0
        };

        let mut subtotal = self.base + distance_km * self.per_km;
        let mut breakdown = vec![BreakdownEntry::Base {
            base: self.base,
            distance_km,
            per_km: self.per_km,
            subtotal,
        }];

        if options.booking_type == BookingType::Private {
            subtotal *= self.private_multiplier;
            breakdown.push(BreakdownEntry::PrivateMultiplier {
                factor: self.private_multiplier,
            });
        }

        if options.scheduled_later {
            subtotal += self.scheduling_fee;
            breakdown.push(BreakdownEntry::SchedulingFee {
                fee: self.scheduling_fee,
            });
        }

        if options.booking_type == BookingType::Shared {
            breakdown.push(BreakdownEntry::SharedSplit {
                passengers: options.passenger_count,
            });
        }

        (subtotal, breakdown)
    }

    pub fn compute_fare(
        &self,
        distance_km: f64,
        provider: Provider,
        options: &TripOptions,
    ) -> FareQuote {
        let (subtotal, mut breakdown) = self.subtotal(distance_km, options);

        let displayed = match options.booking_type {
            BookingType::Shared => subtotal / options.fare_splits() as f64,
            BookingType::Private => subtotal,
        };

        breakdown.push(BreakdownEntry::RouteSource { provider });

        FareQuote {
            // fares are never negative here, so half-away-from-zero is half-up
            amount: displayed.round() as i64,
            breakdown,
        }
    }
}
