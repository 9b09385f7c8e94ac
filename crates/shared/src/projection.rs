//! Web-Mercator slippy-map math.
//!
//! World pixel space at zoom `z` is a square of `TILE_SIZE * 2^z` pixels with
//! (0, 0) at 180°W / 85.05°N. Tiles are addressed `(z, x, y)` as on
//! OpenStreetMap.
use std::f64::consts::PI;

use crate::geo::Coordinate;

pub const TILE_SIZE: f64 = 256.0;

/// Latitude at which the Mercator square ends.
pub const MAX_MERCATOR_LATITUDE: f64 = 85.051_128_78;

/// Highest zoom the projection supports. Raster tile servers stop well below.
pub const MAX_ZOOM: u8 = 22;

/// Side length of the world in pixels at `zoom`.
pub fn world_size(zoom: u8) -> f64 {
    TILE_SIZE * f64::from(1u32 << zoom.min(MAX_ZOOM))
}

/// Wrap a longitude into [-180, 180).
pub fn wrap_longitude(lng: f64) -> f64 {
    (lng + 180.0).rem_euclid(360.0) - 180.0
}

/// Coordinate to world pixels.
pub fn project(coord: Coordinate, zoom: u8) -> (f64, f64) {
    let size = world_size(zoom);
    let lat = coord
        .lat
        .clamp(-MAX_MERCATOR_LATITUDE, MAX_MERCATOR_LATITUDE)
        .to_radians();
    let x = (coord.lng + 180.0) / 360.0 * size;
    let y = (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / PI) / 2.0 * size;
    (x, y)
}

/// World pixels to coordinate. Longitude is wrapped, so pixels left or right
/// of the world square resolve to the repeated copy of the map.
pub fn unproject(x: f64, y: f64, zoom: u8) -> Coordinate {
    let size = world_size(zoom);
    let y = y.clamp(0.0, size);
    let lng = wrap_longitude(x / size * 360.0 - 180.0);
    let n = PI * (1.0 - 2.0 * y / size);
    let lat = n.sinh().atan().to_degrees();
    Coordinate::new(lat, lng)
}

/// Convert a container-relative pixel position into a coordinate, for a view
/// centred on `center` in a container of `width` x `height`.
pub fn container_to_coordinate(
    px: f64,
    py: f64,
    width: f64,
    height: f64,
    center: Coordinate,
    zoom: u8,
) -> Coordinate {
    let (cx, cy) = project(center, zoom);
    unproject(cx + px - width / 2.0, cy + py - height / 2.0, zoom)
}

/// Convert a coordinate into container-relative pixels. When the world is
/// repeated horizontally the copy nearest the view center is used.
pub fn coordinate_to_container(
    coord: Coordinate,
    width: f64,
    height: f64,
    center: Coordinate,
    zoom: u8,
) -> (f64, f64) {
    let size = world_size(zoom);
    let (cx, cy) = project(center, zoom);
    let (x, y) = project(coord, zoom);
    let mut dx = x - cx;
    if dx > size / 2.0 {
        dx -= size;
    } else if dx < -size / 2.0 {
        dx += size;
    }
    (width / 2.0 + dx, height / 2.0 + y - cy)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    pub z: u8,
    pub x: u32,
    pub y: u32,
}

impl Tile {
    /// Fill a `{z}/{x}/{y}` URL template.
    pub fn url(&self, template: &str) -> String {
        template
            .replace("{z}", &self.z.to_string())
            .replace("{x}", &self.x.to_string())
            .replace("{y}", &self.y.to_string())
    }
}

/// A tile positioned inside the map container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedTile {
    pub tile: Tile,
    /// Unwrapped column, distinct for each repeated copy of the world.
    pub column: i64,
    pub left: f64,
    pub top: f64,
}

/// Tiles covering a `width` x `height` container centred on `center`.
pub fn visible_tiles(center: Coordinate, zoom: u8, width: f64, height: f64) -> Vec<PlacedTile> {
    let zoom = zoom.min(MAX_ZOOM);
    let (cx, cy) = project(center, zoom);
    let origin_x = cx - width / 2.0;
    let origin_y = cy - height / 2.0;
    let tiles_per_side = 1i64 << zoom;

    let first_col = (origin_x / TILE_SIZE).floor() as i64;
    let last_col = ((origin_x + width) / TILE_SIZE).floor() as i64;
    let first_row = ((origin_y / TILE_SIZE).floor() as i64).max(0);
    let last_row = (((origin_y + height) / TILE_SIZE).floor() as i64).min(tiles_per_side - 1);

    let mut tiles = Vec::new();
    for row in first_row..=last_row {
        for column in first_col..=last_col {
            tiles.push(PlacedTile {
                tile: Tile {
                    z: zoom,
                    x: column.rem_euclid(tiles_per_side) as u32,
                    y: row as u32,
                },
                column,
                left: column as f64 * TILE_SIZE - origin_x,
                top: row as f64 * TILE_SIZE - origin_y,
            });
        }
    }
    tiles
}
