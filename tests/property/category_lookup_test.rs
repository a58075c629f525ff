//! Property-based tests for the category lookup tables.
//!
//! The lookups are total functions over arbitrary strings: every input
//! maps to some category, unknown inputs map to `Other`, and repeated
//! lookups agree.

use placebook::types::category::Category;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Any string, printable or not, resolves to a listed category
    /// without panicking, and resolves the same way every time.
    #[test]
    fn place_type_lookup_is_total_and_deterministic(place_type in ".*") {
        let first = Category::from_place_type(&place_type);
        let second = Category::from_place_type(&place_type);

        prop_assert_eq!(first, second);
        prop_assert!(Category::all().contains(&first));
    }

    /// Every category's label parses back to exactly that category.
    #[test]
    fn label_roundtrips_for_every_category(
        category in prop::sample::select(Category::all().to_vec())
    ) {
        prop_assert_eq!(Category::from_label(category.label()), category);
    }

    /// Lowercase strings never collide with the capitalized labels, so
    /// they all fall back to Other.
    #[test]
    fn lowercase_labels_fall_back_to_other(label in "[a-z]{1,20}") {
        prop_assert_eq!(Category::from_label(&label), Category::Other);
    }

    /// A place type outside the fixed table maps to Other; prefixing a
    /// known type with junk is enough to leave the table.
    #[test]
    fn prefixed_place_types_fall_back_to_other(
        prefix in "[a-z]{1,5}",
        known in prop::sample::select(vec!["restaurant", "gas_station", "lodging", "store"])
    ) {
        let place_type = format!("{}x{}", prefix, known);
        prop_assert_eq!(Category::from_place_type(&place_type), Category::Other);
    }
}
