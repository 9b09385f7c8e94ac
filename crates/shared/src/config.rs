use serde::{Deserialize, Serialize};

use crate::geo::Coordinate;
use crate::locate::{SuccessRoute, FALLBACK_PATH};

pub const DEFAULT_CENTER: Coordinate = Coordinate::new(-20.0, 0.0);
pub const DEFAULT_ZOOM: u8 = 2;
pub const DEFAULT_TILE_URL: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";

/// Settings for both widgets, overridable from the host page.
/// Every field is optional in the JSON form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub picker: PickerConfig,
    pub locate: LocateConfig,
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PickerConfig {
    /// Id of the element the map renders into.
    pub container_id: String,
    /// Id and name of the text field receiving `"<lat>, <lng>"`.
    pub field_id: String,
    pub default_center: Coordinate,
    pub default_zoom: u8,
    pub min_zoom: u8,
    pub max_zoom: u8,
    pub tile_url: String,
    pub attribution: String,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            container_id: "mapitems".to_string(),
            field_id: "plaque_location".to_string(),
            default_center: DEFAULT_CENTER,
            default_zoom: DEFAULT_ZOOM,
            min_zoom: 1,
            max_zoom: 18,
            tile_url: DEFAULT_TILE_URL.to_string(),
            attribution: "© OpenStreetMap contributors".to_string(),
        }
    }
}

impl PickerConfig {
    /// Clamp a requested zoom level into the configured range.
    pub fn clamp_zoom(&self, zoom: i32) -> u8 {
        let lo = i32::from(self.min_zoom.min(self.max_zoom));
        let hi = i32::from(self.max_zoom.max(self.min_zoom));
        zoom.clamp(lo, hi) as u8
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LocateConfig {
    pub success_route: SuccessRoute,
    pub fallback_path: String,
    pub enable_high_accuracy: bool,
    pub timeout_ms: u32,
    pub maximum_age_ms: u32,
}

impl Default for LocateConfig {
    fn default() -> Self {
        Self {
            success_route: SuccessRoute::default(),
            fallback_path: FALLBACK_PATH.to_string(),
            enable_high_accuracy: false,
            timeout_ms: 10_000,
            maximum_age_ms: 0,
        }
    }
}
