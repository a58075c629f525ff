use std::fmt;

use serde::{Deserialize, Serialize};

/// Category assigned to a bookmark, shown as its map-pin icon.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    Gas,
    Lodging,
    Other,
    Restaurant,
    Shopping,
}

impl Category {
    /// All categories in display order.
    pub fn all() -> &'static [Category] {
        &[
            Category::Gas,
            Category::Lodging,
            Category::Other,
            Category::Restaurant,
            Category::Shopping,
        ]
    }

    /// Human-readable label, also used as the persisted column value.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Gas => "Gas",
            Category::Lodging => "Lodging",
            Category::Other => "Other",
            Category::Restaurant => "Restaurant",
            Category::Shopping => "Shopping",
        }
    }

    /// Name of the pin icon asset for this category.
    pub fn icon(&self) -> &'static str {
        match self {
            Category::Gas => "ic_gas",
            Category::Lodging => "ic_lodging",
            Category::Other => "ic_other",
            Category::Restaurant => "ic_restaurant",
            Category::Shopping => "ic_shopping",
        }
    }

    /// Parses a persisted label. Unknown labels map to `Other`.
    pub fn from_label(s: &str) -> Category {
        match s {
            "Gas" => Category::Gas,
            "Lodging" => Category::Lodging,
            "Restaurant" => Category::Restaurant,
            "Shopping" => Category::Shopping,
            _ => Category::Other,
        }
    }

    /// Maps a raw place type reported by the lookup service to a category.
    ///
    /// The table is fixed; any type it does not list maps to `Other`.
    pub fn from_place_type(place_type: &str) -> Category {
        match place_type {
            "bakery" | "bar" | "cafe" | "food" | "restaurant" | "meal_delivery"
            | "meal_takeaway" => Category::Restaurant,
            "gas_station" => Category::Gas,
            "clothing_store" | "department_store" | "furniture_store"
            | "grocery_or_supermarket" | "hardware_store" | "home_goods_store"
            | "jewelry_store" | "shoe_store" | "shopping_mall" | "store" => Category::Shopping,
            "lodging" | "room" => Category::Lodging,
            _ => Category::Other,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
