//! Wire and domain types for TheMealDB listing endpoint

use serde::{Deserialize, Serialize};

/// Root response shape of `filter.php`.
///
/// TheMealDB signals "no results" as `{"meals": null}`, hence the `Option`.
/// Validation of the absent case happens in [`crate::parse_listing`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingResponse {
    pub meals: Option<Vec<MealRecord>>,
}

/// A single meal as it appears on the wire.
///
/// The endpoint returns more fields than these; everything else is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealRecord {
    #[serde(rename = "idMeal")]
    pub id_meal: String,
    #[serde(rename = "strMeal")]
    pub str_meal: String,
    #[serde(rename = "strMealThumb")]
    pub str_meal_thumb: String,
}

/// Domain-side meal, immutable once fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Meal {
    /// Unique listing key.
    pub id: String,
    pub name: String,
    pub thumbnail_url: String,
}

impl From<MealRecord> for Meal {
    fn from(record: MealRecord) -> Self {
        Self {
            id: record.id_meal,
            name: record.str_meal,
            thumbnail_url: record.str_meal_thumb,
        }
    }
}
