//! Web Mercator math for the slippy map. Screen coordinates are CSS pixels
//! relative to the map container's top-left corner.

use std::f64::consts::PI;

use crate::config;
use crate::geo::GeoPoint;

pub const TILE_SIZE: f64 = 256.0;
pub const MIN_ZOOM: u8 = 1;
pub const MAX_ZOOM: u8 = 18;
pub const MAX_LATITUDE: f64 = 85.051_128_779_806_59;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pixel {
    pub x: f64,
    pub y: f64,
}

pub fn world_size(zoom: u8) -> f64 {
    TILE_SIZE * 2f64.powi(zoom as i32)
}

pub fn wrap_lng(lng: f64) -> f64 {
    let wrapped = (lng + 180.0).rem_euclid(360.0) - 180.0;
    if wrapped == -180.0 && lng > 0.0 {
        180.0
    } else {
        wrapped
    }
}

/// World pixel of a point at `zoom`.
pub fn project(point: GeoPoint, zoom: u8) -> Pixel {
    let size = world_size(zoom);
    let lat = point.lat.clamp(-MAX_LATITUDE, MAX_LATITUDE);
    let sin = lat.to_radians().sin();
    Pixel {
        x: (point.lng + 180.0) / 360.0 * size,
        y: (0.5 - ((1.0 + sin) / (1.0 - sin)).ln() / (4.0 * PI)) * size,
    }
}

pub fn unproject(pixel: Pixel, zoom: u8) -> GeoPoint {
    let size = world_size(zoom);
    let n = PI - 2.0 * PI * pixel.y / size;
    GeoPoint {
        lat: n.sinh().atan().to_degrees().clamp(-MAX_LATITUDE, MAX_LATITUDE),
        lng: wrap_lng(pixel.x / size * 360.0 - 180.0),
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileRef {
    pub x: u32,
    pub y: u32,
    pub zoom: u8,
    pub left: f64,
    pub top: f64,
}

impl TileRef {
    pub fn url(&self) -> String {
        let subdomain = config::TILE_SUBDOMAINS[((self.x + self.y) % 3) as usize];
        config::TILE_URL_TEMPLATE
            .replace("{s}", subdomain)
            .replace("{z}", &self.zoom.to_string())
            .replace("{x}", &self.x.to_string())
            .replace("{y}", &self.y.to_string())
    }
}

/// What the map container currently shows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub center: GeoPoint,
    pub zoom: u8,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(center: GeoPoint, zoom: u8, width: f64, height: f64) -> Self {
        Viewport {
            center,
            zoom: zoom.clamp(MIN_ZOOM, MAX_ZOOM),
            width,
            height,
        }
    }

    /// World pixel under the container's top-left corner.
    fn origin(&self) -> Pixel {
        let c = project(self.center, self.zoom);
        Pixel {
            x: c.x - self.width / 2.0,
            y: c.y - self.height / 2.0,
        }
    }

    pub fn to_screen(&self, point: GeoPoint) -> Pixel {
        let o = self.origin();
        let p = project(point, self.zoom);
        Pixel { x: p.x - o.x, y: p.y - o.y }
    }

    pub fn to_geo(&self, screen: Pixel) -> GeoPoint {
        let o = self.origin();
        unproject(Pixel { x: o.x + screen.x, y: o.y + screen.y }, self.zoom)
    }

    /// Tiles covering the container. Columns wrap around the antimeridian,
    /// rows outside the world are skipped.
    pub fn tiles(&self) -> Vec<TileRef> {
        let o = self.origin();
        let count = 2i64.pow(self.zoom as u32);
        let first_x = (o.x / TILE_SIZE).floor() as i64;
        let last_x = ((o.x + self.width - 1.0) / TILE_SIZE).floor() as i64;
        let first_y = ((o.y / TILE_SIZE).floor() as i64).max(0);
        let last_y = (((o.y + self.height - 1.0) / TILE_SIZE).floor() as i64).min(count - 1);

        let mut tiles = Vec::new();
        for ty in first_y..=last_y {
            for tx in first_x..=last_x {
                tiles.push(TileRef {
                    x: tx.rem_euclid(count) as u32,
                    y: ty as u32,
                    zoom: self.zoom,
                    left: tx as f64 * TILE_SIZE - o.x,
                    top: ty as f64 * TILE_SIZE - o.y,
                });
            }
        }
        tiles
    }

    /// Viewport after dragging the content by `(dx, dy)` screen pixels.
    pub fn panned(&self, dx: f64, dy: f64) -> Viewport {
        let center = self.to_geo(Pixel {
            x: self.width / 2.0 - dx,
            y: self.height / 2.0 - dy,
        });
        Viewport { center, ..*self }
    }

    pub fn zoomed(&self, delta: i8) -> Viewport {
        let zoom = (self.zoom as i16 + delta as i16).clamp(MIN_ZOOM as i16, MAX_ZOOM as i16) as u8;
        Viewport { zoom, ..*self }
    }

    /// Zooms by `delta` keeping the point under `anchor` where it is on screen.
    pub fn zoomed_at(&self, delta: i8, anchor: Pixel) -> Viewport {
        let zoomed = self.zoomed(delta);
        if zoomed.zoom == self.zoom {
            return *self;
        }
        let fixed = project(self.to_geo(anchor), zoomed.zoom);
        let center = unproject(
            Pixel {
                x: fixed.x - anchor.x + self.width / 2.0,
                y: fixed.y - anchor.y + self.height / 2.0,
            },
            zoomed.zoom,
        );
        Viewport { center, ..zoomed }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(lat: f64, lng: f64) -> GeoPoint {
        GeoPoint { lat, lng }
    }

    #[test]
    fn test_null_island_is_world_center() {
        let p = project(pt(0.0, 0.0), 1);
        assert!((p.x - 256.0).abs() < 1e-9);
        assert!((p.y - 256.0).abs() < 1e-9);
    }

    #[test]
    fn test_unproject_inverts_project() {
        let brno = pt(49.1951, 16.6068);
        let back = unproject(project(brno, 7), 7);
        assert!((back.lat - brno.lat).abs() < 1e-9);
        assert!((back.lng - brno.lng).abs() < 1e-9);
    }

    #[test]
    fn test_center_maps_to_middle_of_screen() {
        let vp = Viewport::new(pt(49.1142, 16.3624), 5, 600.0, 360.0);
        let c = vp.to_screen(vp.center);
        assert!((c.x - 300.0).abs() < 1e-9);
        assert!((c.y - 180.0).abs() < 1e-9);
        let g = vp.to_geo(Pixel { x: 300.0, y: 180.0 });
        assert!((g.lat - vp.center.lat).abs() < 1e-9);
    }

    #[test]
    fn test_tiles_cover_viewport() {
        let vp = Viewport::new(pt(49.1142, 16.3624), 5, 600.0, 360.0);
        let tiles = vp.tiles();
        assert!(!tiles.is_empty());
        assert!(tiles.iter().any(|t| t.left <= 0.0 && t.top <= 0.0));
        let right = tiles.iter().map(|t| t.left + TILE_SIZE).fold(f64::MIN, f64::max);
        let bottom = tiles.iter().map(|t| t.top + TILE_SIZE).fold(f64::MIN, f64::max);
        assert!(right >= 600.0);
        assert!(bottom >= 360.0);
        assert!(tiles.iter().all(|t| t.x < 32 && t.y < 32));
    }

    #[test]
    fn test_tiles_wrap_columns_and_drop_rows_outside_world() {
        let vp = Viewport::new(pt(0.0, 179.0), 1, 1024.0, 1024.0);
        let tiles = vp.tiles();
        assert!(tiles.iter().all(|t| t.x < 2 && t.y < 2));
        assert_eq!(tiles.iter().filter(|t| t.y == 0).count(), tiles.len() / 2);
    }

    #[test]
    fn test_tile_url() {
        let tile = TileRef { x: 17, y: 10, zoom: 5, left: 0.0, top: 0.0 };
        assert_eq!(tile.url(), "https://a.tile.openstreetmap.org/5/17/10.png");
    }

    #[test]
    fn test_pan_moves_center_against_drag() {
        let vp = Viewport::new(pt(50.0, 15.0), 5, 600.0, 360.0);
        let moved = vp.panned(100.0, 0.0);
        assert!(moved.center.lng < vp.center.lng);
        assert!((moved.center.lat - vp.center.lat).abs() < 1e-9);
    }

    #[test]
    fn test_zoom_is_clamped() {
        let vp = Viewport::new(pt(0.0, 0.0), 1, 600.0, 360.0);
        assert_eq!(vp.zoomed(-3).zoom, MIN_ZOOM);
        assert_eq!(vp.zoomed(40).zoom, MAX_ZOOM);
        assert_eq!(vp.zoomed(2).zoom, 3);
    }

    #[test]
    fn test_zoom_at_cursor_keeps_point_under_cursor() {
        let vp = Viewport::new(pt(49.1142, 16.3624), 5, 600.0, 360.0);
        let cursor = Pixel { x: 520.0, y: 60.0 };
        let under = vp.to_geo(cursor);
        let zoomed = vp.zoomed_at(1, cursor);
        assert_eq!(zoomed.zoom, 6);
        let after = zoomed.to_screen(under);
        assert!((after.x - cursor.x).abs() < 1e-6, "x drifted to {}", after.x);
        assert!((after.y - cursor.y).abs() < 1e-6, "y drifted to {}", after.y);
    }

    #[test]
    fn test_zoom_at_limit_keeps_view() {
        let vp = Viewport::new(pt(49.1142, 16.3624), MIN_ZOOM, 600.0, 360.0);
        assert_eq!(vp.zoomed_at(-1, Pixel { x: 10.0, y: 10.0 }), vp);
    }

    #[test]
    fn test_wrap_lng() {
        assert_eq!(wrap_lng(190.0), -170.0);
        assert_eq!(wrap_lng(-190.0), 170.0);
        assert_eq!(wrap_lng(180.0), 180.0);
        assert_eq!(wrap_lng(16.5), 16.5);
    }
}
