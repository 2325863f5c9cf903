use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::{Provider, RouteEstimate, TripOptions};

/// One contribution to a fare, in the order it was applied.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BreakdownEntry {
    Base {
        base: f64,
        distance_km: f64,
        per_km: f64,
        subtotal: f64,
    },
    PrivateMultiplier {
        factor: f64,
    },
    SchedulingFee {
        fee: f64,
    },
    SharedSplit {
        passengers: u32,
    },
    RouteSource {
        provider: Provider,
    },
}

impl fmt::Display for BreakdownEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Base {
                base,
                distance_km,
                per_km,
                subtotal,
            } => write!(
                f,
                "Base {} + {:.1} km x {} = {:.2}",
                base, distance_km, per_km, subtotal
            ),
            Self::PrivateMultiplier { factor } => write!(f, "Private multiplier x{}", factor),
            Self::SchedulingFee { fee } => write!(f, "Scheduling fee {}", fee),
            Self::SharedSplit { passengers } => {
                write!(f, "Shared ({} pax) - per person shown", passengers)
            }
            Self::RouteSource { provider } => write!(f, "Route via {}", provider),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FareQuote {
    pub amount: i64,
    pub breakdown: Vec<BreakdownEntry>,
}

impl FareQuote {
    pub fn breakdown_lines(&self) -> Vec<String> {
        self.breakdown.iter().map(|entry| entry.to_string()).collect()
    }
}

/// A resolved route priced for a set of trip options.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TripQuote {
    pub token: Uuid,
    pub route: RouteEstimate,
    pub options: TripOptions,
    pub fare: FareQuote,
    pub quoted_at: DateTime<Utc>,
}

impl TripQuote {
    pub fn new(route: RouteEstimate, options: TripOptions, fare: FareQuote) -> Self {
        Self {
            token: Uuid::new_v4(),
            route,
            options,
            fare,
            quoted_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_render_in_order() {
        let quote = FareQuote {
            amount: 23,
            breakdown: vec![
                BreakdownEntry::Base {
                    base: 10.0,
                    distance_km: 10.0,
                    per_km: 3.5,
                    subtotal: 45.0,
                },
                BreakdownEntry::PrivateMultiplier { factor: 1.8 },
                BreakdownEntry::SchedulingFee { fee: 5.0 },
                BreakdownEntry::SharedSplit { passengers: 2 },
                BreakdownEntry::RouteSource {
                    provider: Provider::Approximate,
                },
            ],
        };

        assert_eq!(
            quote.breakdown_lines(),
            vec![
                "Base 10 + 10.0 km x 3.5 = 45.00",
                "Private multiplier x1.8",
                "Scheduling fee 5",
                "Shared (2 pax) - per person shown",
                "Route via approximate",
            ]
        );
    }

    #[test]
    fn entries_serialize_with_kind_tag() {
        let entry = BreakdownEntry::RouteSource {
            provider: Provider::External,
        };
        let value = serde_json::to_value(&entry).unwrap();

        assert_eq!(value["kind"], "route_source");
        assert_eq!(value["provider"], "external");
    }
}
