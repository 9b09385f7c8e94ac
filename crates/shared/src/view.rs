use crate::config::PickerConfig;
use crate::geo::{Coordinate, CoordinateParseError};
use crate::projection;

/// State of one map picker: what the map shows and where the marker sits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapViewState {
    pub center: Coordinate,
    pub zoom: u8,
    pub marker: Coordinate,
}

impl MapViewState {
    /// Centre on the configured default and drop the marker there.
    pub fn initialize(config: &PickerConfig) -> Self {
        let center = config.default_center;
        Self {
            center,
            zoom: config.clamp_zoom(i32::from(config.default_zoom)),
            marker: center,
        }
    }

    /// Move the marker to `coord` and return the text for the location field.
    pub fn click(&mut self, coord: Coordinate) -> String {
        self.marker = coord;
        coord.to_string()
    }

    /// Apply text typed into the location field. On success the marker moves
    /// there and the view follows; on failure nothing changes.
    pub fn place_from_field(&mut self, text: &str) -> Result<Coordinate, CoordinateParseError> {
        let coord: Coordinate = text.parse()?;
        self.marker = coord;
        self.center = coord;
        Ok(coord)
    }

    /// Shift the view by a drag of `dx`, `dy` screen pixels.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        let size = projection::world_size(self.zoom);
        let (cx, cy) = projection::project(self.center, self.zoom);
        let y = (cy - dy).clamp(0.0, size);
        self.center = projection::unproject(cx - dx, y, self.zoom);
    }

    /// Change zoom while keeping the point under (`anchor_x`, `anchor_y`)
    /// fixed on screen. Returns false when the zoom level is unchanged.
    pub fn zoom_at(
        &mut self,
        new_zoom: u8,
        anchor_x: f64,
        anchor_y: f64,
        width: f64,
        height: f64,
    ) -> bool {
        if new_zoom == self.zoom {
            return false;
        }
        let anchor = projection::container_to_coordinate(
            anchor_x,
            anchor_y,
            width,
            height,
            self.center,
            self.zoom,
        );
        let (ax, ay) = projection::project(anchor, new_zoom);
        self.center = projection::unproject(
            ax - (anchor_x - width / 2.0),
            ay - (anchor_y - height / 2.0),
            new_zoom,
        );
        self.zoom = new_zoom;
        true
    }

    /// Return to the initial center and zoom. The marker stays put.
    pub fn reset(&mut self, config: &PickerConfig) {
        let initial = Self::initialize(config);
        self.center = initial.center;
        self.zoom = initial.zoom;
    }

    /// Marker position in container pixels.
    pub fn marker_position(&self, width: f64, height: f64) -> (f64, f64) {
        projection::coordinate_to_container(self.marker, width, height, self.center, self.zoom)
    }

    /// Coordinate under a container-relative pixel.
    pub fn coordinate_at(&self, px: f64, py: f64, width: f64, height: f64) -> Coordinate {
        projection::container_to_coordinate(px, py, width, height, self.center, self.zoom)
    }
}
