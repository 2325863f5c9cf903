use geo_types::Point;
use serde::{Deserialize, Serialize};

use crate::error::{invalid_input_error, Error};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, Error> {
        let point = Self {
            latitude,
            longitude,
        };
        point.validate()?;

        Ok(point)
    }

    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }

    pub fn validate(&self) -> Result<(), Error> {
        match self.is_valid() {
            true => Ok(()),
            false => Err(invalid_input_error()),
        }
    }
}

/// Parses a `[latitude, longitude]` pair as sent by the booking front-end.
impl TryFrom<&[f64]> for GeoPoint {
    type Error = Error;

    fn try_from(pair: &[f64]) -> Result<Self, Self::Error> {
        match pair {
            [latitude, longitude] => GeoPoint::new(*latitude, *longitude),
            _ => Err(invalid_input_error()),
        }
    }
}

impl From<GeoPoint> for Point<f64> {
    fn from(point: GeoPoint) -> Self {
        Point::new(point.longitude, point.latitude)
    }
}

impl From<Point<f64>> for GeoPoint {
    fn from(point: Point<f64>) -> Self {
        Self {
            latitude: point.y(),
            longitude: point.x(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_must_have_two_elements() {
        assert!(GeoPoint::try_from(&[-26.2041][..]).is_err());
        assert!(GeoPoint::try_from(&[-26.2041, 28.0473, 1.0][..]).is_err());

        let point = GeoPoint::try_from(&[-26.2041, 28.0473][..]).unwrap();
        assert_eq!(point.latitude, -26.2041);
        assert_eq!(point.longitude, 28.0473);
    }

    #[test]
    fn out_of_range_is_invalid_input() {
        let err = GeoPoint::new(91.0, 0.0).unwrap_err();
        assert!(err.is_invalid_input());

        assert!(GeoPoint::new(0.0, -180.5).is_err());
        assert!(GeoPoint::new(f64::NAN, 0.0).is_err());
        assert!(GeoPoint::new(-90.0, 180.0).is_ok());
    }

    #[test]
    fn point_uses_longitude_as_x() {
        let point: Point<f64> = GeoPoint::new(-33.9249, 18.4241).unwrap().into();
        assert_eq!(point.x(), 18.4241);
        assert_eq!(point.y(), -33.9249);

        let back: GeoPoint = point.into();
        assert_eq!(back.latitude, -33.9249);
    }
}
