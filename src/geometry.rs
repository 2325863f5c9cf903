use crate::entities::GeoPoint;

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometres.
pub fn haversine_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let delta_lat = (b.latitude - a.latitude).to_radians();
    let delta_lon = (b.longitude - a.longitude).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(latitude: f64, longitude: f64) -> GeoPoint {
        GeoPoint {
            latitude,
            longitude,
        }
    }

    #[test]
    fn same_point_is_zero() {
        let jhb = point(-26.2041, 28.0473);
        assert_eq!(haversine_km(jhb, jhb), 0.0);
    }

    #[test]
    fn johannesburg_to_pretoria() {
        // ~53.9 km great-circle
        let dist = haversine_km(point(-26.2041, 28.0473), point(-25.7479, 28.2293));
        assert!((dist - 53.9).abs() < 0.5, "got {}", dist);
    }

    #[test]
    fn quarter_meridian() {
        let dist = haversine_km(point(0.0, 0.0), point(90.0, 0.0));
        let expected = EARTH_RADIUS_KM * std::f64::consts::FRAC_PI_2;
        assert!((dist - expected).abs() < 1e-9);
    }

    #[test]
    fn symmetric() {
        let a = point(-33.9249, 18.4241);
        let b = point(-29.8587, 31.0218);
        assert!((haversine_km(a, b) - haversine_km(b, a)).abs() < 1e-9);
    }
}
