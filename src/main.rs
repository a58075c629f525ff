//! PlaceBook — a personal place-bookmarking core: map markers, place
//! lookup, photos, and notes.
//!
//! Entry point: runs a console walkthrough of the core components against
//! in-memory fixtures.

use std::sync::Arc;

use placebook::types::bookmark::Bookmark;
use placebook::types::category::Category;
use placebook::types::geo::GeoPoint;
use placebook::types::place::{PhotoMetadata, Place};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("placebook=info")),
        )
        .init();

    println!();
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║               PlaceBook v{} — Demo Mode               ║", env!("CARGO_PKG_VERSION"));
    println!("║     Map bookmarks: places, photos, categories, notes       ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    demo_database();
    demo_categories();
    demo_sample_size();
    demo_store().await;
    demo_poi_flow().await;
    demo_details_editor().await;

    println!();
    println!("═══════════════════════════════════════════════════════════════");
    println!("  ✅ All 6 components demonstrated successfully!");
    println!("  PlaceBook is ready for a map UI integration.");
    println!("═══════════════════════════════════════════════════════════════");
}

fn section(name: &str) {
    println!("───────────────────────────────────────────────────────────────");
    println!("  📦 {}", name);
    println!("───────────────────────────────────────────────────────────────");
}

fn demo_database() {
    use placebook::database::connection::Database;
    section("Database Layer");

    let db = Database::open_in_memory().expect("Failed to open database");
    let tables: Vec<String> = {
        let conn = db.connection();
        let mut stmt = conn
            .prepare("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
            .unwrap();
        stmt.query_map([], |row| row.get(0))
            .unwrap()
            .filter_map(|r| r.ok())
            .collect()
    };
    println!("  Created {} tables: {}", tables.len(), tables.join(", "));
    println!("  ✓ Database + migrations OK");
    println!();
}

fn demo_categories() {
    section("Place Categories");

    for category in Category::all() {
        println!("  {:<12} icon = {}", category.label(), category.icon());
    }
    for place_type in ["cafe", "gas_station", "lodging", "department_store", "museum"] {
        println!("  {} -> {}", place_type, Category::from_place_type(place_type));
    }
    println!("  ✓ Category table OK");
    println!();
}

fn demo_sample_size() {
    use placebook::services::image_loader::calculate_in_sample_size;
    section("Image Sample-Size Math");

    for (w, h) in [(1920u32, 1080u32), (800, 600), (480, 270), (96, 54)] {
        let sample = calculate_in_sample_size(w, h, 480, 270);
        println!(
            "  {}x{} bounded to 480x270 -> sample size {} (decodes at {}x{})",
            w,
            h,
            sample,
            w / sample,
            h / sample
        );
    }
    println!("  ✓ Sample-size math OK");
    println!();
}

async fn demo_store() {
    use placebook::database::connection::Database;
    use placebook::managers::bookmark_store::BookmarkStore;
    use placebook::services::image_store::ImageStore;
    section("Bookmark Store (write queue + live watch)");

    let db = Database::open_in_memory().unwrap();
    let images = ImageStore::new("demo_images").unwrap();
    let store = BookmarkStore::open(db, images);
    let mut watch = store.watch_all();

    let id = store
        .add(sample_bookmark("Ferry Building"), None)
        .await
        .unwrap();
    watch.changed().await.unwrap();
    println!(
        "  Added bookmark {} -> watch sees {} entry(s)",
        id,
        watch.borrow().len()
    );

    let mut loaded = store.get(id).await.unwrap().unwrap();
    loaded.notes = "Saturday farmers market".to_string();
    store.update(loaded).await.unwrap();
    watch.changed().await.unwrap();
    println!("  Updated notes -> \"{}\"", watch.borrow()[0].notes);

    let watcher = store.watch_bookmark(id);
    println!(
        "  Single-bookmark watcher sees: {:?}",
        watcher.current().map(|b| b.name)
    );

    store.delete(id).await.unwrap();
    watch.changed().await.unwrap();
    println!("  Deleted -> watch sees {} entry(s)", watch.borrow().len());
    println!(
        "  After delete, watcher sees: {:?}",
        watcher.current().map(|b| b.name)
    );

    let _ = std::fs::remove_dir_all("demo_images");
    println!("  ✓ BookmarkStore OK");
    println!();
}

async fn demo_poi_flow() {
    use image::DynamicImage;
    use placebook::database::connection::Database;
    use placebook::managers::bookmark_store::BookmarkStore;
    use placebook::managers::maps_controller::{InfoWindowAction, MapsController};
    use placebook::services::image_store::ImageStore;
    use placebook::services::location_service::FixedLocationProvider;
    use placebook::services::map_surface::RecordingMapSurface;
    use placebook::services::places_service::StaticPlacesService;
    use placebook::types::place::PointOfInterest;
    use placebook::types::settings::PlacebookSettings;
    section("POI Tap Flow (map + places)");

    let db = Database::open_in_memory().unwrap();
    let images = ImageStore::new("demo_images").unwrap();
    let store = BookmarkStore::open(db, images);

    let places = Arc::new(
        StaticPlacesService::new()
            .with_place(sample_place())
            .with_photo("demo-photo-ref", DynamicImage::new_rgba8(640, 360)),
    );
    let location = Arc::new(FixedLocationProvider::granted(Some(GeoPoint::new(
        37.7955, -122.3937,
    ))));
    let mut controller = MapsController::new(
        RecordingMapSurface::new(),
        store.clone(),
        places,
        location,
        PlacebookSettings::default(),
    );

    controller.show_current_location().await;
    if let Some((point, zoom)) = controller.map().camera() {
        println!(
            "  Camera at ({:.4}, {:.4}) zoom {}",
            point.latitude, point.longitude, zoom
        );
    }

    let poi = PointOfInterest {
        place_id: "demo-ferry-building".to_string(),
        name: "Ferry Building".to_string(),
        location: GeoPoint::new(37.7955, -122.3937),
    };
    let marker = controller
        .display_poi(&poi)
        .await
        .expect("place fixture is seeded");
    println!(
        "  Tapped POI -> transient marker, info window open = {}",
        controller.map().open_info_window() == Some(marker)
    );

    let action = controller.handle_info_window_click(marker).await.unwrap();
    println!("  Info window tap -> {:?}", action);

    let bookmarks = store.all().await.unwrap();
    controller.handle_bookmarks_changed(&bookmarks);
    println!(
        "  Mirror rebuild -> {} saved marker(s) on map",
        controller.map().marker_count()
    );

    if let InfoWindowAction::SavedNewBookmark(id) = action {
        controller.move_to_bookmark(id);
        println!(
            "  Move to bookmark -> info window reopened = {}",
            controller.map().open_info_window().is_some()
        );
    }

    let _ = std::fs::remove_dir_all("demo_images");
    println!("  ✓ MapsController OK");
    println!();
}

async fn demo_details_editor() {
    use placebook::database::connection::Database;
    use placebook::managers::bookmark_store::BookmarkStore;
    use placebook::managers::details_editor::DetailsEditor;
    use placebook::services::image_store::ImageStore;
    use placebook::services::media_picker::StaticMediaPicker;
    use placebook::types::settings::PlacebookSettings;
    section("Details Editor");

    let db = Database::open_in_memory().unwrap();
    let images = ImageStore::new("demo_images").unwrap();
    let store = BookmarkStore::open(db, images.clone());

    let id = store
        .add(sample_bookmark("Blue Bottle Coffee"), None)
        .await
        .unwrap();
    let place_backed = store
        .add_bookmark_from_place(&sample_place(), None)
        .await
        .unwrap();

    let media = Arc::new(StaticMediaPicker::new(true, true));
    let mut editor = DetailsEditor::load(
        store.clone(),
        images.clone(),
        media.clone(),
        PlacebookSettings::default(),
        id,
    )
    .await
    .unwrap();
    println!(
        "  Loaded \"{}\" ({})",
        editor.bookmark().name,
        editor.bookmark().category
    );

    let mut edits = editor.current_edits();
    edits.name = "   ".to_string();
    println!(
        "  Save with blank name -> {:?}",
        editor.save(edits).await.unwrap()
    );

    let mut edits = editor.current_edits();
    edits.notes = "Great single-origin pour over".to_string();
    println!("  Save with notes -> {:?}", editor.save(edits).await.unwrap());

    println!("  Photo options: {:?}", editor.photo_options());

    let manual_share = editor.share_payload();
    println!(
        "  Share (manual): {}",
        manual_share.text.lines().last().unwrap_or("")
    );

    let place_editor = DetailsEditor::load(
        store.clone(),
        images.clone(),
        media,
        PlacebookSettings::default(),
        place_backed,
    )
    .await
    .unwrap();
    println!(
        "  Share (place):  {}",
        place_editor.share_payload().text.lines().last().unwrap_or("")
    );

    editor.request_delete();
    println!("  Delete armed: {}", editor.delete_armed());
    println!("  Confirm -> {:?}", editor.confirm_delete().await.unwrap());
    println!(
        "  Remaining bookmarks: {}",
        store.all().await.unwrap().len()
    );

    let _ = std::fs::remove_dir_all("demo_images");
    println!("  ✓ DetailsEditor OK");
    println!();
}

fn sample_bookmark(name: &str) -> Bookmark {
    Bookmark {
        id: None,
        place_id: None,
        name: name.to_string(),
        address: "1 Ferry Building, San Francisco".to_string(),
        phone: "415-555-0100".to_string(),
        notes: String::new(),
        location: GeoPoint::new(37.7955, -122.3937),
        category: Category::Shopping,
        created_at: 0,
        updated_at: 0,
    }
}

fn sample_place() -> Place {
    Place {
        place_id: "demo-ferry-building".to_string(),
        name: "Ferry Building Marketplace".to_string(),
        phone: Some("415-555-0100".to_string()),
        address: Some("1 Ferry Building, San Francisco".to_string()),
        location: GeoPoint::new(37.7955, -122.3937),
        types: vec!["shopping_mall".to_string(), "food".to_string()],
        photos: vec![PhotoMetadata {
            reference: "demo-photo-ref".to_string(),
            width: 640,
            height: 360,
            attribution: None,
        }],
    }
}
