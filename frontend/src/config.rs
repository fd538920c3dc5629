use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::Europe::Prague;
use log::Level;

use crate::geo::GeoPoint;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Chatty console while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub const UNLOCK_COOKIE: &str = "gift_unlocked";
pub const UNLOCK_MAX_AGE_SECS: u32 = 30 * 24 * 60 * 60;

pub const TILE_URL_TEMPLATE: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const TILE_SUBDOMAINS: [&str; 3] = ["a", "b", "c"];
pub const TILE_ATTRIBUTION: &str = "© OpenStreetMap contributors";
pub const MARKER_ICON_URL: &str = "https://unpkg.com/leaflet@1.9.4/dist/images/marker-icon.png";

pub const BACKGROUND_TRACK: &str = "/audio/daiynbyz.mp3";
pub const BACKGROUND_VOLUME: f64 = 0.6;

// City question: where I'm from, judged within 300 km.
pub const CITY_TARGET: GeoPoint = GeoPoint { lat: 52.5447, lng: 103.8883 };
pub const CITY_RADIUS_KM: f64 = 300.0;
pub const CITY_START_CENTER: GeoPoint = GeoPoint { lat: 49.1142, lng: 16.3624 };
pub const CITY_START_ZOOM: u8 = 5;

pub const ANGARSK: GeoPoint = GeoPoint { lat: 52.5448, lng: 103.8885 };
pub const ASTANA: GeoPoint = GeoPoint { lat: 51.1694, lng: 71.4491 };
pub const BRNO: GeoPoint = GeoPoint { lat: 49.1951, lng: 16.6068 };
pub const MEET_MAP_CENTER: GeoPoint = GeoPoint { lat: 52.0, lng: 45.0 };
pub const MEET_MAP_ZOOM: u8 = 3;

/// 14 July 2025, 07:44 Prague time.
pub fn together_since() -> DateTime<Utc> {
    Prague
        .with_ymd_and_hms(2025, 7, 14, 7, 44, 0)
        .earliest()
        .map(|t| t.with_timezone(&Utc))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_together_since_is_summer_time() {
        let expected = Utc.with_ymd_and_hms(2025, 7, 14, 5, 44, 0).unwrap();
        assert_eq!(together_since(), expected);
    }

    #[test]
    fn test_unlock_lasts_thirty_days() {
        assert_eq!(UNLOCK_MAX_AGE_SECS, 2_592_000);
    }
}
