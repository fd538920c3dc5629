
use crate::error::ValidationError;

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Result<Self, ValidationError> {
        if !lat.is_finite() || !lng.is_finite() {
            return Err(ValidationError::MalformedCoordinate);
        }
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
            return Err(ValidationError::MalformedCoordinate);
        }
        Ok(GeoPoint { lat, lng })
    }

    /// Parses the `"lat,lng"` form the map question stores in its field.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let (lat, lng) = raw
            .split_once(',')
            .ok_or(ValidationError::MalformedCoordinate)?;
        let lat = lat
            .trim()
            .parse::<f64>()
            .map_err(|_| ValidationError::MalformedCoordinate)?;
        let lng = lng
            .trim()
            .parse::<f64>()
            .map_err(|_| ValidationError::MalformedCoordinate)?;
        GeoPoint::new(lat, lng)
    }

    pub fn to_field_value(&self) -> String {
        format!("{},{}", self.lat, self.lng)
    }
}

/// Great-circle distance in kilometres.
pub fn haversine_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let s = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * s.sqrt().min(1.0).asin()
}

/// Target with a tolerance radius. Picks within `radius_km` are accepted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnswerZone {
    pub target: GeoPoint,
    pub radius_km: f64,
}

impl AnswerZone {
    pub fn new(target: GeoPoint, radius_km: f64) -> Self {
        AnswerZone { target, radius_km }
    }

    /// Returns the distance to the target when accepted.
    pub fn check(&self, pick: GeoPoint) -> Result<f64, ValidationError> {
        let distance_km = haversine_km(pick, self.target);
        if distance_km <= self.radius_km {
            Ok(distance_km)
        } else {
            Err(ValidationError::OutsideRadius {
                distance_km,
                radius_km: self.radius_km,
            })
        }
    }

    pub fn check_field(&self, raw: &str) -> Result<f64, ValidationError> {
        if raw.is_empty() {
            return Err(ValidationError::Missing("Выбери точку на карте 🙂"));
        }
        self.check(GeoPoint::parse(raw)?)
    }

    /// Text shown next to the map right after a pick.
    pub fn proximity_hint(&self, pick: GeoPoint) -> String {
        let d = haversine_km(pick, self.target);
        if d < self.radius_km {
            "Ооо, очень точно 👀".to_string()
        } else {
            format!("Примерно {} км от цели", d.round() as i64)
        }
    }
}

/// Points along a bowed route from `from` to `to`. The latitude is lifted by
/// `sin(pi * t) * bend` so the line arcs, peaking halfway.
pub fn arc_points(from: GeoPoint, to: GeoPoint, steps: usize, bend: f64) -> Vec<GeoPoint> {
    let steps = steps.max(1);
    (0..=steps)
        .map(|i| {
            let t = i as f64 / steps as f64;
            let lift = (std::f64::consts::PI * t).sin() * bend;
            GeoPoint {
                lat: from.lat + (to.lat - from.lat) * t + lift,
                lng: from.lng + (to.lng - from.lng) * t,
            }
        })
        .collect()
}

/// Whole kilometres grouped by thousands with a no-break space, as ru-RU does.
pub fn format_km(km: i64) -> String {
    let digits = km.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 * 2);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('\u{a0}');
        }
        grouped.push(ch);
    }
    if km < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(lat: f64, lng: f64) -> GeoPoint {
        GeoPoint::new(lat, lng).unwrap()
    }

    #[test]
    fn test_haversine_one_degree_on_equator() {
        let d = haversine_km(pt(0.0, 0.0), pt(0.0, 1.0));
        assert!((d - 111.195).abs() < 0.2, "got {}", d);
    }

    #[test]
    fn test_haversine_symmetric_and_zero_on_self() {
        let brno = pt(49.1951, 16.6068);
        let angarsk = pt(52.5448, 103.8885);
        assert_eq!(haversine_km(brno, brno), 0.0);
        assert!((haversine_km(brno, angarsk) - haversine_km(angarsk, brno)).abs() < 1e-9);
    }

    #[test]
    fn test_antipodes_do_not_produce_nan() {
        let d = haversine_km(pt(0.0, 0.0), pt(0.0, 180.0));
        assert!((d - std::f64::consts::PI * EARTH_RADIUS_KM).abs() < 1e-6);
    }

    #[test]
    fn test_pick_near_brno_is_accepted() {
        let zone = AnswerZone::new(pt(49.1142, 16.3624), 300.0);
        let d = zone.check(pt(49.20, 16.61)).unwrap();
        assert!((d - 21.0).abs() < 1.0, "got {}", d);
    }

    #[test]
    fn test_radius_boundary() {
        let target = pt(0.0, 0.0);
        let pick = pt(0.0, 2.0);
        let exact = haversine_km(pick, target);

        let zone = AnswerZone::new(target, exact);
        assert!(zone.check(pick).is_ok());

        let tighter = AnswerZone::new(target, exact - 1e-6);
        assert_eq!(
            tighter.check(pick).map_err(|e| e.to_string()),
            Err("Почти! Попробуй чуть ближе 💋".to_string())
        );
    }

    #[test]
    fn test_check_field_messages() {
        let zone = AnswerZone::new(pt(52.5447, 103.8883), 300.0);
        assert_eq!(
            zone.check_field(""),
            Err(ValidationError::Missing("Выбери точку на карте 🙂"))
        );
        assert_eq!(zone.check_field("abc"), Err(ValidationError::MalformedCoordinate));
        assert_eq!(zone.check_field("52.5,nope"), Err(ValidationError::MalformedCoordinate));
        assert_eq!(zone.check_field("95,10"), Err(ValidationError::MalformedCoordinate));
        assert!(zone.check_field("52.3,104.2").is_ok());
        assert!(matches!(
            zone.check_field("49.19,16.60"),
            Err(ValidationError::OutsideRadius { .. })
        ));
    }

    #[test]
    fn test_field_value_parses_back() {
        let p = pt(49.123456, 16.654321);
        assert_eq!(GeoPoint::parse(&p.to_field_value()).unwrap(), p);
    }

    #[test]
    fn test_proximity_hint() {
        let zone = AnswerZone::new(pt(0.0, 0.0), 300.0);
        assert_eq!(zone.proximity_hint(pt(0.5, 0.5)), "Ооо, очень точно 👀");
        assert_eq!(zone.proximity_hint(pt(0.0, 10.0)), "Примерно 1112 км от цели");
    }

    #[test]
    fn test_arc_lifts_midpoint_and_keeps_ends() {
        let from = pt(52.5448, 103.8885);
        let to = pt(49.1951, 16.6068);
        let arc = arc_points(from, to, 70, 0.22);
        assert_eq!(arc.len(), 71);
        assert!((arc[0].lat - from.lat).abs() < 1e-9);
        assert!((arc[70].lat - to.lat).abs() < 1e-9);
        let straight_mid = (from.lat + to.lat) / 2.0;
        assert!((arc[35].lat - straight_mid - 0.22).abs() < 1e-9);
    }

    #[test]
    fn test_format_km_groups_thousands() {
        assert_eq!(format_km(0), "0");
        assert_eq!(format_km(999), "999");
        assert_eq!(format_km(5623), "5\u{a0}623");
        assert_eq!(format_km(1234567), "1\u{a0}234\u{a0}567");
    }
}
