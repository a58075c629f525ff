//! Device location access for PlaceBook.
//!
//! The trait is the seam to the platform location stack: a permission
//! gate plus a best-effort "last known location" query that may
//! legitimately produce nothing.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;

use crate::types::errors::LocationError;
use crate::types::geo::GeoPoint;

/// Trait defining device location operations.
#[async_trait]
pub trait LocationProvider: Send + Sync {
    /// Whether location permission is currently granted.
    fn has_permission(&self) -> bool;

    /// Asks the user for location permission. Returns the resulting grant
    /// state; denial is a normal outcome.
    async fn request_permission(&self) -> bool;

    /// The last known device location. `None` when no fix is available,
    /// which callers must treat as a normal state.
    async fn last_location(&self) -> Result<Option<GeoPoint>, LocationError>;
}

/// Scriptable location provider used by tests and the demo walkthrough.
pub struct FixedLocationProvider {
    location: Option<GeoPoint>,
    granted: AtomicBool,
    grant_on_request: bool,
}

impl FixedLocationProvider {
    /// Permission already granted, reporting the given location.
    pub fn granted(location: Option<GeoPoint>) -> Self {
        Self {
            location,
            granted: AtomicBool::new(true),
            grant_on_request: false,
        }
    }

    /// Permission not granted, but the interactive request will grant it.
    pub fn grants_on_request(location: Option<GeoPoint>) -> Self {
        Self {
            location,
            granted: AtomicBool::new(false),
            grant_on_request: true,
        }
    }

    /// Permission not granted and the interactive request is refused.
    pub fn denied() -> Self {
        Self {
            location: None,
            granted: AtomicBool::new(false),
            grant_on_request: false,
        }
    }
}

#[async_trait]
impl LocationProvider for FixedLocationProvider {
    fn has_permission(&self) -> bool {
        self.granted.load(Ordering::SeqCst)
    }

    async fn request_permission(&self) -> bool {
        if self.grant_on_request {
            self.granted.store(true, Ordering::SeqCst);
        }
        self.granted.load(Ordering::SeqCst)
    }

    async fn last_location(&self) -> Result<Option<GeoPoint>, LocationError> {
        if !self.has_permission() {
            return Err(LocationError::PermissionDenied);
        }
        Ok(self.location)
    }
}
