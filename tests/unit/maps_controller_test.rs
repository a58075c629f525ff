//! Unit tests for the MapsController flows.
//!
//! Each test wires a controller over a RecordingMapSurface, an in-memory
//! bookmark store, and scripted place/location fixtures, then asserts on
//! the surface state and the persisted set.

use std::sync::Arc;

use image::DynamicImage;
use placebook::database::Database;
use placebook::managers::bookmark_store::BookmarkStore;
use placebook::managers::maps_controller::{InfoWindowAction, MapsController};
use placebook::managers::marker_manager::MarkerManagerTrait;
use placebook::services::image_store::ImageStore;
use placebook::services::location_service::FixedLocationProvider;
use placebook::services::map_surface::{MapOp, RecordingMapSurface};
use placebook::services::places_service::StaticPlacesService;
use placebook::types::category::Category;
use placebook::types::geo::GeoPoint;
use placebook::types::marker::{MarkerTag, HUE_RED};
use placebook::types::place::{Place, PhotoMetadata, PointOfInterest};
use placebook::types::settings::PlacebookSettings;
use tempfile::TempDir;

const FERRY_BUILDING: GeoPoint = GeoPoint {
    latitude: 37.7955,
    longitude: -122.3937,
};

fn sample_place() -> Place {
    Place {
        place_id: "place-ferry-building".to_string(),
        name: "Ferry Building".to_string(),
        phone: Some("415-555-0100".to_string()),
        address: Some("1 Ferry Plaza".to_string()),
        location: FERRY_BUILDING,
        types: vec!["shopping_mall".to_string()],
        photos: vec![PhotoMetadata {
            reference: "photo-ref".to_string(),
            width: 640,
            height: 360,
            attribution: None,
        }],
    }
}

fn sample_poi() -> PointOfInterest {
    PointOfInterest {
        place_id: "place-ferry-building".to_string(),
        name: "Ferry Building".to_string(),
        location: FERRY_BUILDING,
    }
}

/// Helper: build a controller over fresh backing storage and the given
/// fixtures. The caller keeps the TempDir alive.
fn controller_with(
    dir: &TempDir,
    places: StaticPlacesService,
    location: FixedLocationProvider,
) -> (
    MapsController<RecordingMapSurface>,
    BookmarkStore,
    ImageStore,
) {
    let db = Database::open_in_memory().expect("in-memory database");
    let images = ImageStore::new(dir.path().join("images")).expect("image store");
    let store = BookmarkStore::open(db, images.clone());
    let controller = MapsController::new(
        RecordingMapSurface::new(),
        store.clone(),
        Arc::new(places),
        Arc::new(location),
        PlacebookSettings::default(),
    );
    (controller, store, images)
}

#[tokio::test]
async fn test_display_poi_adds_transient_marker_with_photo() {
    let dir = TempDir::new().unwrap();
    let places = StaticPlacesService::new()
        .with_place(sample_place())
        .with_photo("photo-ref", DynamicImage::new_rgb8(640, 360));
    let (mut controller, _store, _images) =
        controller_with(&dir, places, FixedLocationProvider::denied());

    let marker = controller
        .display_poi(&sample_poi())
        .await
        .expect("marker should be added");

    let options = controller.map().marker(marker).expect("marker on the map");
    assert_eq!(options.hue, HUE_RED, "unsaved places use the default style");
    assert_eq!(options.title, "Ferry Building");
    assert_eq!(
        controller.map().open_info_window(),
        Some(marker),
        "the info window opens on the new marker"
    );

    match controller.markers().tag(marker) {
        Some(MarkerTag::TransientPlace(info)) => {
            assert_eq!(info.place.place_id, "place-ferry-building");
            let photo = info.photo.as_ref().expect("photo should be attached");
            // 640x360 bounded to the default 480x270 image size.
            assert_eq!((photo.width(), photo.height()), (480, 270));
        }
        other => panic!("expected TransientPlace tag, got {:?}", other),
    }
}

/// A failed details fetch aborts the flow: no marker, no info window.
#[tokio::test]
async fn test_display_poi_aborts_when_place_fetch_fails() {
    let dir = TempDir::new().unwrap();
    let (mut controller, _store, _images) = controller_with(
        &dir,
        StaticPlacesService::new(), // nothing seeded
        FixedLocationProvider::denied(),
    );

    let marker = controller.display_poi(&sample_poi()).await;

    assert!(marker.is_none());
    assert_eq!(controller.map().marker_count(), 0);
    assert_eq!(controller.map().open_info_window(), None);
}

/// A failed photo fetch degrades to a marker without a photo.
#[tokio::test]
async fn test_display_poi_degrades_when_photo_fetch_fails() {
    let dir = TempDir::new().unwrap();
    let places = StaticPlacesService::new().with_place(sample_place()); // photo not seeded
    let (mut controller, _store, _images) =
        controller_with(&dir, places, FixedLocationProvider::denied());

    let marker = controller
        .display_poi(&sample_poi())
        .await
        .expect("marker should still be added");

    match controller.markers().tag(marker) {
        Some(MarkerTag::TransientPlace(info)) => assert!(info.photo.is_none()),
        other => panic!("expected TransientPlace tag, got {:?}", other),
    }
}

#[tokio::test]
async fn test_display_poi_without_photos_skips_photo_fetch() {
    let dir = TempDir::new().unwrap();
    let mut place = sample_place();
    place.photos.clear();
    let places = StaticPlacesService::new().with_place(place);
    let (mut controller, _store, _images) =
        controller_with(&dir, places, FixedLocationProvider::denied());

    let marker = controller
        .display_poi(&sample_poi())
        .await
        .expect("marker should be added");

    match controller.markers().tag(marker) {
        Some(MarkerTag::TransientPlace(info)) => assert!(info.photo.is_none()),
        other => panic!("expected TransientPlace tag, got {:?}", other),
    }
}

/// After teardown, an in-flight resolution finishes without touching the
/// map.
#[tokio::test]
async fn test_display_poi_after_teardown_adds_nothing() {
    let dir = TempDir::new().unwrap();
    let places = StaticPlacesService::new().with_place(sample_place());
    let (mut controller, _store, _images) =
        controller_with(&dir, places, FixedLocationProvider::denied());

    controller.teardown();
    let marker = controller.display_poi(&sample_poi()).await;

    assert!(marker.is_none());
    assert_eq!(controller.map().marker_count(), 0);
}

#[tokio::test]
async fn test_info_window_click_saves_tapped_place() {
    let dir = TempDir::new().unwrap();
    let places = StaticPlacesService::new()
        .with_place(sample_place())
        .with_photo("photo-ref", DynamicImage::new_rgb8(640, 360));
    let (mut controller, store, images) =
        controller_with(&dir, places, FixedLocationProvider::denied());

    let marker = controller.display_poi(&sample_poi()).await.unwrap();
    let action = controller.handle_info_window_click(marker).await.unwrap();

    let id = match action {
        InfoWindowAction::SavedNewBookmark(id) => id,
        other => panic!("expected SavedNewBookmark, got {:?}", other),
    };

    let saved = store.get(id).await.unwrap().expect("bookmark should exist");
    assert_eq!(saved.name, "Ferry Building");
    assert_eq!(saved.category, Category::Shopping);
    assert!(images.load(id).is_some(), "the fetched photo is persisted");

    // The transient marker is gone; the saved mirror arrives with the
    // next snapshot rebuild.
    assert_eq!(controller.map().marker_count(), 0);
    assert!(controller.markers().is_empty());
}

#[tokio::test]
async fn test_info_window_click_saves_place_without_photo() {
    let dir = TempDir::new().unwrap();
    let places = StaticPlacesService::new().with_place(sample_place()); // photo fetch fails
    let (mut controller, store, images) =
        controller_with(&dir, places, FixedLocationProvider::denied());

    let marker = controller.display_poi(&sample_poi()).await.unwrap();
    let action = controller.handle_info_window_click(marker).await.unwrap();

    let id = match action {
        InfoWindowAction::SavedNewBookmark(id) => id,
        other => panic!("expected SavedNewBookmark, got {:?}", other),
    };
    assert!(store.get(id).await.unwrap().is_some());
    assert!(images.load(id).is_none(), "no photo, no image file");
}

#[tokio::test]
async fn test_info_window_click_on_saved_marker_opens_editor() {
    let dir = TempDir::new().unwrap();
    let places = StaticPlacesService::new().with_place(sample_place());
    let (mut controller, store, _images) =
        controller_with(&dir, places, FixedLocationProvider::denied());

    let transient = controller.display_poi(&sample_poi()).await.unwrap();
    let action = controller.handle_info_window_click(transient).await.unwrap();
    let id = match action {
        InfoWindowAction::SavedNewBookmark(id) => id,
        other => panic!("expected SavedNewBookmark, got {:?}", other),
    };

    let snapshot = store.all().await.unwrap();
    controller.handle_bookmarks_changed(&snapshot);
    controller.move_to_bookmark(id);
    let marker = controller
        .markers()
        .marker_for_bookmark(id)
        .expect("saved marker should exist");
    assert_eq!(controller.map().open_info_window(), Some(marker));

    let action = controller.handle_info_window_click(marker).await.unwrap();
    assert_eq!(action, InfoWindowAction::EditBookmark(id));
    assert_eq!(
        controller.map().open_info_window(),
        None,
        "the window closes before the editor opens"
    );
}

#[tokio::test]
async fn test_info_window_click_on_unknown_marker_is_ignored() {
    let dir = TempDir::new().unwrap();
    let (mut controller, _store, _images) = controller_with(
        &dir,
        StaticPlacesService::new(),
        FixedLocationProvider::denied(),
    );

    let action = controller
        .handle_info_window_click(placebook::types::marker::MarkerId::new())
        .await
        .unwrap();
    assert_eq!(action, InfoWindowAction::Ignored);
}

#[tokio::test]
async fn test_bookmarks_changed_mirrors_snapshot() {
    let dir = TempDir::new().unwrap();
    let (mut controller, store, _images) = controller_with(
        &dir,
        StaticPlacesService::new(),
        FixedLocationProvider::denied(),
    );

    store
        .add_bookmark_from_place(&sample_place(), None)
        .await
        .unwrap();
    let snapshot = store.all().await.unwrap();
    controller.handle_bookmarks_changed(&snapshot);
    assert_eq!(controller.map().marker_count(), 1);

    controller.handle_bookmarks_changed(&[]);
    assert_eq!(controller.map().marker_count(), 0);
}

#[tokio::test]
async fn test_show_current_location_moves_camera() {
    let dir = TempDir::new().unwrap();
    let (mut controller, _store, _images) = controller_with(
        &dir,
        StaticPlacesService::new(),
        FixedLocationProvider::granted(Some(FERRY_BUILDING)),
    );

    controller.show_current_location().await;

    assert_eq!(controller.map().camera(), Some((FERRY_BUILDING, 16.0)));
    assert!(matches!(
        controller.map().ops().last(),
        Some(MapOp::MoveCamera(_, _))
    ));
}

#[tokio::test]
async fn test_show_current_location_requests_permission() {
    let dir = TempDir::new().unwrap();
    let (mut controller, _store, _images) = controller_with(
        &dir,
        StaticPlacesService::new(),
        FixedLocationProvider::grants_on_request(Some(FERRY_BUILDING)),
    );

    controller.show_current_location().await;

    assert_eq!(controller.map().camera(), Some((FERRY_BUILDING, 16.0)));
}

/// A denied permission request leaves the camera untouched.
#[tokio::test]
async fn test_show_current_location_denied_leaves_camera() {
    let dir = TempDir::new().unwrap();
    let (mut controller, _store, _images) = controller_with(
        &dir,
        StaticPlacesService::new(),
        FixedLocationProvider::denied(),
    );

    controller.show_current_location().await;

    assert_eq!(controller.map().camera(), None);
}

/// Permission without a fix is a normal state; the camera stays.
#[tokio::test]
async fn test_show_current_location_without_fix_leaves_camera() {
    let dir = TempDir::new().unwrap();
    let (mut controller, _store, _images) = controller_with(
        &dir,
        StaticPlacesService::new(),
        FixedLocationProvider::granted(None),
    );

    controller.show_current_location().await;

    assert_eq!(controller.map().camera(), None);
}

#[tokio::test]
async fn test_move_to_bookmark_animates_and_opens_window() {
    let dir = TempDir::new().unwrap();
    let (mut controller, store, _images) = controller_with(
        &dir,
        StaticPlacesService::new(),
        FixedLocationProvider::denied(),
    );

    let id = store
        .add_bookmark_from_place(&sample_place(), None)
        .await
        .unwrap();
    let snapshot = store.all().await.unwrap();
    controller.handle_bookmarks_changed(&snapshot);

    controller.move_to_bookmark(id);

    let marker = controller.markers().marker_for_bookmark(id).unwrap();
    assert_eq!(controller.map().open_info_window(), Some(marker));
    assert_eq!(controller.map().camera(), Some((FERRY_BUILDING, 16.0)));
    assert!(matches!(
        controller.map().ops().last(),
        Some(MapOp::AnimateCamera(_, _))
    ));
}

#[tokio::test]
async fn test_move_to_unknown_bookmark_does_nothing() {
    let dir = TempDir::new().unwrap();
    let (mut controller, _store, _images) = controller_with(
        &dir,
        StaticPlacesService::new(),
        FixedLocationProvider::denied(),
    );

    controller.move_to_bookmark(999);

    assert_eq!(controller.map().camera(), None);
    assert_eq!(controller.map().open_info_window(), None);
}
