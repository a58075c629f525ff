//! Unit tests for bookmark categories: labels, icons, and the place-type
//! lookup table.

use placebook::types::category::Category;
use rstest::rstest;

#[test]
fn test_all_lists_every_category_once() {
    let all = Category::all();
    assert_eq!(all.len(), 5);

    let mut seen = std::collections::HashSet::new();
    for category in all {
        assert!(seen.insert(*category), "duplicate category in all()");
    }
}

/// Labels round-trip through `from_label` for every category.
#[test]
fn test_label_roundtrip() {
    for category in Category::all() {
        assert_eq!(Category::from_label(category.label()), *category);
    }
}

#[test]
fn test_from_label_unknown_maps_to_other() {
    assert_eq!(Category::from_label("Museum"), Category::Other);
    assert_eq!(Category::from_label(""), Category::Other);
    assert_eq!(Category::from_label("restaurant"), Category::Other); // case-sensitive
}

/// Each category maps to a dedicated pin icon asset.
#[rstest]
#[case(Category::Gas, "ic_gas")]
#[case(Category::Lodging, "ic_lodging")]
#[case(Category::Other, "ic_other")]
#[case(Category::Restaurant, "ic_restaurant")]
#[case(Category::Shopping, "ic_shopping")]
fn test_icon_asset_names(#[case] category: Category, #[case] expected: &str) {
    assert_eq!(category.icon(), expected);
}

/// The place-type table groups raw lookup-service types into categories.
#[rstest]
#[case("bakery", Category::Restaurant)]
#[case("bar", Category::Restaurant)]
#[case("cafe", Category::Restaurant)]
#[case("food", Category::Restaurant)]
#[case("restaurant", Category::Restaurant)]
#[case("meal_delivery", Category::Restaurant)]
#[case("meal_takeaway", Category::Restaurant)]
#[case("gas_station", Category::Gas)]
#[case("clothing_store", Category::Shopping)]
#[case("department_store", Category::Shopping)]
#[case("furniture_store", Category::Shopping)]
#[case("grocery_or_supermarket", Category::Shopping)]
#[case("hardware_store", Category::Shopping)]
#[case("home_goods_store", Category::Shopping)]
#[case("jewelry_store", Category::Shopping)]
#[case("shoe_store", Category::Shopping)]
#[case("shopping_mall", Category::Shopping)]
#[case("store", Category::Shopping)]
#[case("lodging", Category::Lodging)]
#[case("room", Category::Lodging)]
fn test_place_type_table(#[case] place_type: &str, #[case] expected: Category) {
    assert_eq!(Category::from_place_type(place_type), expected);
}

/// Types outside the table fall back to Other rather than failing.
#[rstest]
#[case("point_of_interest")]
#[case("establishment")]
#[case("church")]
#[case("")]
#[case("Restaurant")] // table keys are lowercase wire names
fn test_unlisted_place_types_map_to_other(#[case] place_type: &str) {
    assert_eq!(Category::from_place_type(place_type), Category::Other);
}

#[test]
fn test_display_matches_label() {
    for category in Category::all() {
        assert_eq!(category.to_string(), category.label());
    }
}
