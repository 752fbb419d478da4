use crate::state::AppState;

/// View model for the pagination bar - all presentation data pre-computed
#[derive(Debug, Clone)]
pub struct PaginationViewModel {
    /// Pre-formatted label, e.g. "Page 2 of 3"
    pub label: String,
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

impl PaginationViewModel {
    /// Build view model from app state
    pub fn from_state(state: &AppState) -> Self {
        let current = state.pager.current_page();
        let total = state.pager.total_pages(state.meals.visible.len());

        Self {
            label: format!("Page {} of {}", current, total),
            prev_enabled: current > 1,
            next_enabled: current < total,
        }
    }
}
