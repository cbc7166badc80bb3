use foundation::LatLng;
use serde::{Deserialize, Serialize};

/// Script loader for the map widget; the API key is appended.
pub const MAPS_SCRIPT_BASE: &str =
    "https://maps.googleapis.com/maps/api/js?v=3.exp&libraries=geometry,drawing,places&key=";

/// Compile-time default for the map widget API key.
const BUILD_MAPS_API_KEY: Option<&str> = option_env!("PARKMAP_MAPS_API_KEY");

/// Zoom levels the map widget accepts.
pub const MAX_ZOOM: u8 = 22;

/// Where the parks API lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub facilities_url: String,
    pub parks_url: String,
    pub filters_url: String,
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapCenter {
    pub lat: f64,
    pub lng: f64,
}

/// Viewer settings handed over by the host page as JSON.
///
/// Every field is optional; missing fields take the defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub facilities_url: String,
    pub parks_url: String,
    pub filters_url: String,
    pub maps_api_key: String,
    pub center: MapCenter,
    pub zoom: u8,
    pub map_height_px: u32,
    pub title: String,
    /// `tracing` filter directive, e.g. `"info"` or `"mapview=debug"`.
    pub log_level: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            facilities_url: "http://localhost/map/facilities.php".to_string(),
            parks_url: "http://localhost/map/parks.php".to_string(),
            filters_url: "http://localhost/map/filter.php".to_string(),
            maps_api_key: BUILD_MAPS_API_KEY.unwrap_or_default().to_string(),
            center: MapCenter {
                lat: 49.256439,
                lng: -123.104004,
            },
            zoom: 12,
            map_height_px: 500,
            title: "Vancouver Parks".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl ViewerConfig {
    /// Parses and validates the host's config. Blank input means all defaults.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config = if text.trim().is_empty() {
            Self::default()
        } else {
            serde_json::from_str::<Self>(text).map_err(|e| ConfigError::Parse(e.to_string()))?
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        LatLng::new(self.center.lat, self.center.lng)
            .map_err(|e| ConfigError::Invalid(format!("center: {e}")))?;
        if self.zoom > MAX_ZOOM {
            return Err(ConfigError::Invalid(format!(
                "zoom {} above {MAX_ZOOM}",
                self.zoom
            )));
        }
        for (field, url) in [
            ("facilities_url", &self.facilities_url),
            ("parks_url", &self.parks_url),
            ("filters_url", &self.filters_url),
        ] {
            if url.trim().is_empty() {
                return Err(ConfigError::Invalid(format!("{field} is empty")));
            }
        }
        Ok(())
    }

    pub fn endpoints(&self) -> Endpoints {
        Endpoints {
            facilities_url: self.facilities_url.clone(),
            parks_url: self.parks_url.clone(),
            filters_url: self.filters_url.clone(),
        }
    }

    pub fn maps_script_url(&self) -> String {
        format!("{MAPS_SCRIPT_BASE}{}", self.maps_api_key.trim())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Parse(String),
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Parse(msg) => write!(f, "viewer config is not valid JSON: {msg}"),
            ConfigError::Invalid(msg) => write!(f, "invalid viewer config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}
