use mealdb_client::Meal;

/// Action enum - represents all possible actions in the application
/// Actions are dispatched to the reducer to update state
#[derive(Debug, Clone)]
pub enum Action {
    // Lifecycle
    Bootstrap,

    // Search input (raw query, per keystroke)
    QueryInput(char),
    QueryBackspace,
    ClearQuery,

    /// The debouncer settled on a query value
    DebouncedQueryChanged(String),

    // Pagination
    NextPage,
    PreviousPage,
    GoToPage(usize),

    // Background task completion notifications
    MealsLoaded(Result<Vec<Meal>, String>),

    // State update actions (dispatched internally)
    SetLoadingState(crate::state::LoadingState),
    TickSpinner,

    // Overlays
    ToggleHelp,
    ToggleDebugConsole,
    ScrollDebugConsoleUp,
    ScrollDebugConsoleDown,
    ToggleDebugAutoScroll,
    ClearDebugLogs,
    UpdateDebugConsoleViewport(usize),

    Quit,
    None,
}
