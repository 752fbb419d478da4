use crate::{
    actions::Action,
    effect::Effect,
    search::filter_meals,
    state::*,
};

/// Root reducer that delegates to sub-reducers based on action type
/// Pure function: takes state and action, returns new state plus effects
pub fn reduce(mut state: AppState, action: &Action) -> (AppState, Vec<Effect>) {
    let mut effects = Vec::new();

    state.ui = ui_reducer(state.ui, action);
    let (search, search_effects) = search_reducer(state.search, action);
    state.search = search;
    effects.extend(search_effects);
    state.meals = meals_reducer(state.meals, action);
    state.task = task_reducer(state.task, action);
    state.debug_console = debug_console_reducer(state.debug_console, action);

    match action {
        Action::Bootstrap => {
            effects.push(Effect::FetchMeals);
        }

        // Derived state: the visible set is a function of the collection and
        // the debounced query. Recompute it whenever either input changed and
        // pull the page cursor back into range afterwards.
        Action::MealsLoaded(Ok(_)) | Action::DebouncedQueryChanged(_) => {
            state.meals.visible = filter_meals(&state.meals.all, &state.search.debounced_query);
            state.pager.clamp(state.meals.visible.len());
        }

        Action::NextPage => {
            state.pager.next(state.meals.visible.len());
        }
        Action::PreviousPage => {
            state.pager.previous();
        }
        Action::GoToPage(page) => {
            state.pager.go_to(*page, state.meals.visible.len());
        }

        _ => {}
    }

    (state, effects)
}

/// UI state reducer - handles UI-related actions
fn ui_reducer(mut state: UiState, action: &Action) -> UiState {
    match action {
        Action::Quit => {
            state.should_quit = true;
        }
        Action::ToggleHelp => {
            state.show_help = !state.show_help;
        }
        Action::TickSpinner => {
            state.spinner_frame = state.spinner_frame.wrapping_add(1);
        }
        _ => {}
    }

    state
}

/// Search state reducer.
///
/// Every raw query edit requests a debounce effect; the debounced value only
/// lands when the timer's emission comes back as `DebouncedQueryChanged`.
fn search_reducer(mut state: SearchState, action: &Action) -> (SearchState, Vec<Effect>) {
    let mut effects = Vec::new();

    match action {
        Action::QueryInput(c) => {
            state.query.push(*c);
            effects.push(Effect::Debounce {
                query: state.query.clone(),
            });
        }
        Action::QueryBackspace => {
            if state.query.pop().is_some() {
                effects.push(Effect::Debounce {
                    query: state.query.clone(),
                });
            }
        }
        Action::ClearQuery => {
            if !state.query.is_empty() {
                state.query.clear();
                effects.push(Effect::Debounce {
                    query: String::new(),
                });
            }
        }
        Action::DebouncedQueryChanged(query) => {
            state.debounced_query = query.clone();
        }
        _ => {}
    }

    (state, effects)
}

/// Meal collection reducer
fn meals_reducer(mut state: MealsState, action: &Action) -> MealsState {
    match action {
        Action::SetLoadingState(loading_state) => {
            state.loading_state = loading_state.clone();
        }
        Action::MealsLoaded(Ok(meals)) => {
            state.all = meals.clone();
            state.loading_state = LoadingState::Loaded;
        }
        Action::MealsLoaded(Err(message)) => {
            state.loading_state = LoadingState::Error(message.clone());
        }
        _ => {}
    }

    state
}

/// Task status reducer
fn task_reducer(mut state: TaskState, action: &Action) -> TaskState {
    match action {
        Action::SetLoadingState(LoadingState::Loading) => {
            state.status = Some(TaskStatus {
                message: "Fetching meal listing...".to_string(),
                status_type: TaskStatusType::Running,
            });
        }
        Action::MealsLoaded(result) => {
            state.status = Some(match result {
                Ok(meals) => TaskStatus {
                    message: format!("Loaded {} meals", meals.len()),
                    status_type: TaskStatusType::Success,
                },
                Err(message) => TaskStatus {
                    message: message.clone(),
                    status_type: TaskStatusType::Error,
                },
            });
        }
        _ => {}
    }

    state
}

/// Debug console state reducer
fn debug_console_reducer(mut state: DebugConsoleState, action: &Action) -> DebugConsoleState {
    match action {
        Action::ToggleDebugConsole => {
            state.is_open = !state.is_open;
        }
        Action::ScrollDebugConsoleUp => {
            state.scroll_offset = state.scroll_offset.saturating_sub(1);
            state.auto_scroll = false;
        }
        Action::ScrollDebugConsoleDown => {
            state.scroll_offset = state.scroll_offset.saturating_add(1);
        }
        Action::ToggleDebugAutoScroll => {
            state.auto_scroll = !state.auto_scroll;
        }
        Action::ClearDebugLogs => {
            if let Ok(mut logs) = state.logs.lock() {
                logs.clear();
            }
            state.scroll_offset = 0;
        }
        Action::UpdateDebugConsoleViewport(height) => {
            state.viewport_height = *height;
        }
        _ => {}
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Store;
    use mealdb_client::Meal;

    fn meal(id: usize, name: &str) -> Meal {
        Meal {
            id: id.to_string(),
            name: name.to_string(),
            thumbnail_url: format!("https://example.test/{id}.jpg"),
        }
    }

    fn numbered_meals(count: usize) -> Vec<Meal> {
        (1..=count)
            .map(|i| meal(i, &format!("Item{:02}", i)))
            .collect()
    }

    fn page_names(state: &AppState) -> Vec<String> {
        state
            .pager
            .page_slice(&state.meals.visible)
            .iter()
            .map(|m| m.name.clone())
            .collect()
    }

    #[test]
    fn test_load_populates_collection_and_visible_set() {
        let mut store = Store::default();
        let _ = store.dispatch(Action::MealsLoaded(Ok(numbered_meals(25))));

        let state = store.state();
        assert_eq!(state.meals.loading_state, LoadingState::Loaded);
        assert_eq!(state.meals.all.len(), 25);
        assert_eq!(state.meals.visible.len(), 25);
    }

    #[test]
    fn test_pagination_end_to_end() {
        // 25 items, page size 10: 3 pages, last one holding 5 items
        let mut store = Store::default();
        let _ = store.dispatch(Action::MealsLoaded(Ok(numbered_meals(25))));

        let state = store.state();
        assert_eq!(state.pager.total_pages(state.meals.visible.len()), 3);
        assert_eq!(
            page_names(state),
            (1..=10).map(|i| format!("Item{:02}", i)).collect::<Vec<_>>()
        );

        let _ = store.dispatch(Action::NextPage);
        let _ = store.dispatch(Action::NextPage);
        let state = store.state();
        assert_eq!(state.pager.current_page(), 3);
        assert_eq!(
            page_names(state),
            (21..=25).map(|i| format!("Item{:02}", i)).collect::<Vec<_>>()
        );

        // next() on the last page is a no-op
        let _ = store.dispatch(Action::NextPage);
        assert_eq!(store.state().pager.current_page(), 3);

        // previous() at page 1 is a no-op
        let _ = store.dispatch(Action::GoToPage(1));
        let _ = store.dispatch(Action::PreviousPage);
        assert_eq!(store.state().pager.current_page(), 1);
    }

    #[test]
    fn test_go_to_page_is_clamped() {
        let mut store = Store::default();
        let _ = store.dispatch(Action::MealsLoaded(Ok(numbered_meals(25))));

        let _ = store.dispatch(Action::GoToPage(99));
        assert_eq!(store.state().pager.current_page(), 3);

        let _ = store.dispatch(Action::GoToPage(0));
        assert_eq!(store.state().pager.current_page(), 1);
    }

    #[test]
    fn test_search_end_to_end() {
        let mut store = Store::default();
        let _ = store.dispatch(Action::MealsLoaded(Ok(vec![meal(1, "Chicken Curry")])));

        let _ = store.dispatch(Action::DebouncedQueryChanged("curry".to_string()));
        let state = store.state();
        assert_eq!(state.meals.visible.len(), 1);
        assert_eq!(state.meals.visible[0].name, "Chicken Curry");

        let _ = store.dispatch(Action::DebouncedQueryChanged("xyz".to_string()));
        assert!(store.state().meals.visible.is_empty());
    }

    #[test]
    fn test_raw_query_does_not_filter_until_debounced() {
        let mut store = Store::default();
        let _ = store.dispatch(Action::MealsLoaded(Ok(numbered_meals(25))));

        let _ = store.dispatch(Action::QueryInput('x'));
        let state = store.state();
        assert_eq!(state.search.query, "x");
        assert_eq!(state.search.debounced_query, "");
        // Still showing everything: only the debounced value reaches the filter
        assert_eq!(state.meals.visible.len(), 25);

        let _ = store.dispatch(Action::DebouncedQueryChanged("x".to_string()));
        assert!(store.state().meals.visible.is_empty());
    }

    #[test]
    fn test_filter_change_clamps_current_page() {
        let mut store = Store::default();
        let mut meals = numbered_meals(24);
        meals.push(meal(25, "Chicken Curry"));
        let _ = store.dispatch(Action::MealsLoaded(Ok(meals)));

        let _ = store.dispatch(Action::GoToPage(3));
        assert_eq!(store.state().pager.current_page(), 3);

        // Narrowing the filter to a single match must not leave the cursor on
        // a page that no longer exists
        let _ = store.dispatch(Action::DebouncedQueryChanged("curry".to_string()));
        let state = store.state();
        assert_eq!(state.meals.visible.len(), 1);
        assert_eq!(state.pager.current_page(), 1);
        assert_eq!(page_names(state), vec!["Chicken Curry".to_string()]);
    }

    #[test]
    fn test_fetch_failure_surfaces_fixed_message() {
        let mut store = Store::default();
        let _ = store.dispatch(Action::MealsLoaded(Err("Failed to fetch meals".to_string())));

        assert_eq!(
            store.state().meals.loading_state,
            LoadingState::Error("Failed to fetch meals".to_string())
        );
        let status = store.state().task.status.as_ref().unwrap();
        assert_eq!(status.status_type, TaskStatusType::Error);
    }

    #[test]
    fn test_clear_query_schedules_empty_debounce() {
        let mut store = Store::default();
        let _ = store.dispatch(Action::QueryInput('a'));

        let effects = store.dispatch(Action::ClearQuery);
        assert_eq!(store.state().search.query, "");
        assert!(
            effects
                .iter()
                .any(|e| matches!(e, Effect::Debounce { query } if query.is_empty()))
        );

        // Clearing an already-empty query schedules nothing
        let effects = store.dispatch(Action::ClearQuery);
        assert!(effects.is_empty());
    }

    #[test]
    fn test_backspace_on_empty_query_is_no_op() {
        let mut store = Store::default();
        let effects = store.dispatch(Action::QueryBackspace);
        assert!(effects.is_empty());
        assert_eq!(store.state().search.query, "");
    }
}
