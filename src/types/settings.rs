use serde::{Deserialize, Serialize};

/// Top-level application settings container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PlacebookSettings {
    pub places: PlacesSettings,
    pub map: MapSettings,
    pub images: ImageSettings,
}

/// Place lookup service settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlacesSettings {
    /// API key for the hosted place lookup service.
    pub api_key: String,
    pub base_url: String,
}

impl Default for PlacesSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: "https://maps.googleapis.com/maps/api/place".to_string(),
        }
    }
}

/// Map behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MapSettings {
    /// Zoom level applied when centering on a location.
    pub default_zoom: f32,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self { default_zoom: 16.0 }
    }
}

/// Bounds applied when decoding and fetching bookmark photos.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ImageSettings {
    pub max_width: u32,
    pub max_height: u32,
}

impl Default for ImageSettings {
    fn default() -> Self {
        Self {
            max_width: 480,
            max_height: 270,
        }
    }
}
