//! Place lookup service for PlaceBook.
//!
//! Resolves tapped points of interest into full place details and fetches
//! bounded photos for them. The trait is the seam to the vendor API;
//! [`HttpPlacesService`] talks to the hosted Places web service and
//! [`StaticPlacesService`] serves seeded fixtures for tests and demos.

use std::collections::HashMap;

use async_trait::async_trait;
use image::DynamicImage;

use crate::types::errors::PlacesError;
use crate::types::place::{Place, PlaceField, PhotoMetadata};

#[cfg(feature = "network")]
use crate::types::geo::GeoPoint;
#[cfg(feature = "network")]
use serde::Deserialize;

/// Trait defining place lookup operations.
#[async_trait]
pub trait PlacesService: Send + Sync {
    /// Fetches details for a place, restricted to the requested fields.
    async fn fetch_place(
        &self,
        place_id: &str,
        fields: &[PlaceField],
    ) -> Result<Place, PlacesError>;

    /// Fetches the photo behind a metadata reference, sized by the service
    /// to fit within the given bounds.
    async fn fetch_photo(
        &self,
        photo: &PhotoMetadata,
        max_width: u32,
        max_height: u32,
    ) -> Result<DynamicImage, PlacesError>;
}

// === HttpPlacesService ===

/// Place lookup backed by the hosted Places web service.
#[cfg(feature = "network")]
pub struct HttpPlacesService {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

#[cfg(feature = "network")]
impl HttpPlacesService {
    /// Creates a client for the service at `base_url` using `api_key`.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self, PlacesError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| PlacesError::Network(format!("failed to create client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    fn field_mask(fields: &[PlaceField]) -> String {
        fields
            .iter()
            .map(|f| f.as_str())
            .collect::<Vec<_>>()
            .join(",")
    }
}

#[cfg(feature = "network")]
#[derive(Debug, Deserialize)]
struct DetailsResponse {
    status: String,
    error_message: Option<String>,
    result: Option<WirePlace>,
}

#[cfg(feature = "network")]
#[derive(Debug, Deserialize)]
struct WirePlace {
    place_id: String,
    name: String,
    formatted_phone_number: Option<String>,
    formatted_address: Option<String>,
    geometry: Option<WireGeometry>,
    #[serde(default)]
    types: Vec<String>,
    #[serde(default)]
    photos: Vec<WirePhoto>,
}

#[cfg(feature = "network")]
#[derive(Debug, Deserialize)]
struct WireGeometry {
    location: WireLatLng,
}

#[cfg(feature = "network")]
#[derive(Debug, Deserialize)]
struct WireLatLng {
    lat: f64,
    lng: f64,
}

#[cfg(feature = "network")]
#[derive(Debug, Deserialize)]
struct WirePhoto {
    photo_reference: String,
    width: u32,
    height: u32,
    #[serde(default)]
    html_attributions: Vec<String>,
}

#[cfg(feature = "network")]
impl From<WirePlace> for Place {
    fn from(wire: WirePlace) -> Self {
        let location = wire
            .geometry
            .map(|g| GeoPoint::new(g.location.lat, g.location.lng))
            .unwrap_or_default();
        Place {
            place_id: wire.place_id,
            name: wire.name,
            phone: wire.formatted_phone_number,
            address: wire.formatted_address,
            location,
            types: wire.types,
            photos: wire
                .photos
                .into_iter()
                .map(|p| PhotoMetadata {
                    reference: p.photo_reference,
                    width: p.width,
                    height: p.height,
                    attribution: p.html_attributions.into_iter().next(),
                })
                .collect(),
        }
    }
}

#[cfg(feature = "network")]
#[async_trait]
impl PlacesService for HttpPlacesService {
    async fn fetch_place(
        &self,
        place_id: &str,
        fields: &[PlaceField],
    ) -> Result<Place, PlacesError> {
        let url = format!(
            "{}/details/json?place_id={}&fields={}&key={}",
            self.base_url,
            urlencoding::encode(place_id),
            Self::field_mask(fields),
            self.api_key,
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| PlacesError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(PlacesError::Network(format!("HTTP {}", response.status())));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| PlacesError::Network(e.to_string()))?;
        let details: DetailsResponse =
            serde_json::from_slice(&bytes).map_err(|e| PlacesError::Decode(e.to_string()))?;

        if details.status != "OK" {
            return Err(PlacesError::Api {
                status: details.status,
                message: details.error_message.unwrap_or_default(),
            });
        }

        let result = details.result.ok_or_else(|| {
            PlacesError::Decode("details response missing result".to_string())
        })?;
        Ok(result.into())
    }

    async fn fetch_photo(
        &self,
        photo: &PhotoMetadata,
        max_width: u32,
        max_height: u32,
    ) -> Result<DynamicImage, PlacesError> {
        let url = format!(
            "{}/photo?maxwidth={}&maxheight={}&photo_reference={}&key={}",
            self.base_url,
            max_width,
            max_height,
            urlencoding::encode(&photo.reference),
            self.api_key,
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| PlacesError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(PlacesError::Network(format!("HTTP {}", response.status())));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| PlacesError::Network(e.to_string()))?;
        image::load_from_memory(&bytes).map_err(|e| PlacesError::Decode(e.to_string()))
    }
}

// === StaticPlacesService ===

/// In-memory place lookup used by tests and the demo walkthrough.
///
/// Seeded with places and photos keyed by photo reference; anything not
/// seeded answers with a `NOT_FOUND` service status.
#[derive(Default)]
pub struct StaticPlacesService {
    places: HashMap<String, Place>,
    photos: HashMap<String, DynamicImage>,
}

impl StaticPlacesService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a place, keyed by its place ID.
    pub fn with_place(mut self, place: Place) -> Self {
        self.places.insert(place.place_id.clone(), place);
        self
    }

    /// Seeds the photo served for a metadata reference.
    pub fn with_photo(mut self, reference: impl Into<String>, image: DynamicImage) -> Self {
        self.photos.insert(reference.into(), image);
        self
    }
}

#[async_trait]
impl PlacesService for StaticPlacesService {
    async fn fetch_place(
        &self,
        place_id: &str,
        _fields: &[PlaceField],
    ) -> Result<Place, PlacesError> {
        self.places
            .get(place_id)
            .cloned()
            .ok_or_else(|| PlacesError::Api {
                status: "NOT_FOUND".to_string(),
                message: format!("no place with id {}", place_id),
            })
    }

    async fn fetch_photo(
        &self,
        photo: &PhotoMetadata,
        max_width: u32,
        max_height: u32,
    ) -> Result<DynamicImage, PlacesError> {
        let image = self
            .photos
            .get(&photo.reference)
            .ok_or_else(|| PlacesError::Api {
                status: "NOT_FOUND".to_string(),
                message: format!("no photo for reference {}", photo.reference),
            })?;

        // The hosted service sizes photos to the requested bounds; the
        // fixture mirrors that for oversized seeds.
        if image.width() > max_width || image.height() > max_height {
            Ok(image.thumbnail(max_width, max_height))
        } else {
            Ok(image.clone())
        }
    }
}
