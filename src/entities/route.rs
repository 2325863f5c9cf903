use std::fmt;

use serde::{Deserialize, Serialize};

use crate::entities::GeoPoint;

/// Which computation produced a [`RouteEstimate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Provider {
    External,
    Approximate,
}

impl Provider {
    pub fn name(&self) -> &'static str {
        match self {
            Self::External => "external",
            Self::Approximate => "approximate",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RouteEstimate {
    pub distance_km: f64,
    pub duration_minutes: u32,
    pub path: Vec<GeoPoint>,
    pub provider: Provider,
}
