use serde::{Deserialize, Serialize};

use crate::types::category::Category;
use crate::types::geo::GeoPoint;

/// A point of interest tapped on the map, before any details are known.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointOfInterest {
    pub place_id: String,
    pub name: String,
    pub location: GeoPoint,
}

/// Metadata describing a photo the place lookup service can deliver.
///
/// The reference token is opaque; width and height are the intrinsic
/// dimensions reported by the service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhotoMetadata {
    pub reference: String,
    pub width: u32,
    pub height: u32,
    pub attribution: Option<String>,
}

/// Place details resolved from the lookup service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Place {
    pub place_id: String,
    pub name: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub location: GeoPoint,
    pub types: Vec<String>,
    pub photos: Vec<PhotoMetadata>,
}

impl Place {
    /// Derives a bookmark category from the first reported place type.
    /// Places reporting no types fall back to `Category::Other`.
    pub fn category(&self) -> Category {
        match self.types.first() {
            Some(t) => Category::from_place_type(t),
            None => Category::Other,
        }
    }

    /// The first photo reference, if the service reported any.
    pub fn primary_photo(&self) -> Option<&PhotoMetadata> {
        self.photos.first()
    }
}

/// Fields that can be requested from the place lookup service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceField {
    Id,
    Name,
    PhoneNumber,
    Address,
    LatLng,
    Types,
    PhotoMetadatas,
}

impl PlaceField {
    /// The full field mask used when resolving a tapped point of interest.
    pub fn poi_mask() -> &'static [PlaceField] {
        &[
            PlaceField::Id,
            PlaceField::Name,
            PlaceField::PhoneNumber,
            PlaceField::Address,
            PlaceField::LatLng,
            PlaceField::Types,
            PlaceField::PhotoMetadatas,
        ]
    }

    /// Wire name of the field in lookup requests.
    pub fn as_str(&self) -> &'static str {
        match self {
            PlaceField::Id => "place_id",
            PlaceField::Name => "name",
            PlaceField::PhoneNumber => "formatted_phone_number",
            PlaceField::Address => "formatted_address",
            PlaceField::LatLng => "geometry",
            PlaceField::Types => "types",
            PlaceField::PhotoMetadatas => "photos",
        }
    }
}
