//! Map rendering seam for PlaceBook.
//!
//! The controller never talks to a vendor map SDK directly; it drives
//! this trait. [`RecordingMapSurface`] is the headless implementation:
//! it tracks live markers, the camera, and the open info window, and
//! keeps an append-only operation log that tests assert against.

use std::collections::HashMap;

use crate::types::geo::GeoPoint;
use crate::types::marker::{MarkerId, MarkerOptions};

/// Trait defining the operations a map surface must support.
pub trait MapSurface {
    /// Places a marker and returns its handle.
    fn add_marker(&mut self, options: MarkerOptions) -> MarkerId;
    fn remove_marker(&mut self, id: MarkerId);
    /// Removes every marker from the map.
    fn clear(&mut self);
    fn show_info_window(&mut self, id: MarkerId);
    fn hide_info_window(&mut self);
    fn move_camera(&mut self, center: GeoPoint, zoom: f32);
    fn animate_camera(&mut self, center: GeoPoint, zoom: f32);
}

/// One recorded map operation.
#[derive(Debug, Clone, PartialEq)]
pub enum MapOp {
    AddMarker(MarkerId),
    RemoveMarker(MarkerId),
    Clear,
    ShowInfoWindow(MarkerId),
    HideInfoWindow,
    MoveCamera(GeoPoint, f32),
    AnimateCamera(GeoPoint, f32),
}

/// In-memory map surface that records everything done to it.
#[derive(Debug, Default)]
pub struct RecordingMapSurface {
    markers: HashMap<MarkerId, MarkerOptions>,
    camera: Option<(GeoPoint, f32)>,
    open_info_window: Option<MarkerId>,
    ops: Vec<MapOp>,
}

impl RecordingMapSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    pub fn marker(&self, id: MarkerId) -> Option<&MarkerOptions> {
        self.markers.get(&id)
    }

    pub fn camera(&self) -> Option<(GeoPoint, f32)> {
        self.camera
    }

    pub fn open_info_window(&self) -> Option<MarkerId> {
        self.open_info_window
    }

    /// Every operation performed on the surface, in order.
    pub fn ops(&self) -> &[MapOp] {
        &self.ops
    }
}

impl MapSurface for RecordingMapSurface {
    fn add_marker(&mut self, options: MarkerOptions) -> MarkerId {
        let id = MarkerId::new();
        self.markers.insert(id, options);
        self.ops.push(MapOp::AddMarker(id));
        id
    }

    fn remove_marker(&mut self, id: MarkerId) {
        self.markers.remove(&id);
        if self.open_info_window == Some(id) {
            self.open_info_window = None;
        }
        self.ops.push(MapOp::RemoveMarker(id));
    }

    fn clear(&mut self) {
        self.markers.clear();
        self.open_info_window = None;
        self.ops.push(MapOp::Clear);
    }

    fn show_info_window(&mut self, id: MarkerId) {
        if self.markers.contains_key(&id) {
            self.open_info_window = Some(id);
        }
        self.ops.push(MapOp::ShowInfoWindow(id));
    }

    fn hide_info_window(&mut self) {
        self.open_info_window = None;
        self.ops.push(MapOp::HideInfoWindow);
    }

    fn move_camera(&mut self, center: GeoPoint, zoom: f32) {
        self.camera = Some((center, zoom));
        self.ops.push(MapOp::MoveCamera(center, zoom));
    }

    fn animate_camera(&mut self, center: GeoPoint, zoom: f32) {
        self.camera = Some((center, zoom));
        self.ops.push(MapOp::AnimateCamera(center, zoom));
    }
}
