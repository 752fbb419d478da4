//! Case-insensitive substring filtering of the meal collection

use mealdb_client::Meal;

/// Derive the visible subset of `meals` for a (debounced) query.
///
/// An empty query returns the collection unchanged, in order. Otherwise the
/// result is the ordered subsequence whose name, lowercased, contains the
/// lowercased query as a substring. Codepoint case folding only, no
/// locale-aware collation.
pub fn filter_meals(meals: &[Meal], query: &str) -> Vec<Meal> {
    if query.is_empty() {
        return meals.to_vec();
    }

    let needle = query.to_lowercase();
    meals
        .iter()
        .filter(|meal| meal.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
