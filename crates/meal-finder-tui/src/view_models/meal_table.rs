use crate::state::AppState;

/// Fixed message shown when the filter matches nothing
pub const NO_MEALS_MESSAGE: &str = "No meals found";

/// View model for the meal table - all presentation data pre-computed
#[derive(Debug, Clone)]
pub struct MealTableViewModel {
    /// Pre-formatted title with result count
    pub title: String,
    /// One row per meal on the current page (or the whole visible set when
    /// pagination is disabled)
    pub rows: Vec<MealRow>,
}

/// A single table row
#[derive(Debug, Clone)]
pub struct MealRow {
    pub id: String,
    pub name: String,
    pub thumbnail_url: String,
}

impl MealTableViewModel {
    /// Build view model from app state
    pub fn from_state(state: &AppState) -> Self {
        let visible = &state.meals.visible;

        let page: &[mealdb_client::Meal] = if state.config.paginated {
            state.pager.page_slice(visible)
        } else {
            visible
        };

        let rows = page
            .iter()
            .map(|meal| MealRow {
                id: meal.id.clone(),
                name: meal.name.clone(),
                thumbnail_url: meal.thumbnail_url.clone(),
            })
            .collect();

        let title = format!(" Meals ({} matching) ", visible.len());

        Self { title, rows }
    }

    /// True when the filter matched nothing and the empty message should show
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
