use std::sync::{Arc, Mutex};

use mealdb_client::Meal;

use crate::{config::Config, pager::PageState, theme::Theme};

/// Root application state following Redux pattern
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub ui: UiState,
    pub search: SearchState,
    pub meals: MealsState,
    pub pager: PageState,
    pub task: TaskState,
    pub debug_console: DebugConsoleState,
    pub config: Config,
    pub theme: Theme,
}

/// UI-specific state (help overlay, spinner, quit flag)
#[derive(Debug, Clone)]
pub struct UiState {
    pub show_help: bool,
    pub spinner_frame: usize,
    pub should_quit: bool,
    /// Shared with the event handler so it can remap keys while the help
    /// overlay is open
    pub help_open_shared: Arc<Mutex<bool>>,
}

/// Search query state.
///
/// `query` changes on every keystroke; `debounced_query` only when the
/// debounce timer fires. Both start empty, so the initial debounced value
/// equals the initial input with no startup delay.
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    pub query: String,
    pub debounced_query: String,
}

/// The fetched meal collection and its derived visible subset
#[derive(Debug, Clone, Default)]
pub struct MealsState {
    /// Full collection, snapshot taken at startup and never mutated
    pub all: Vec<Meal>,
    /// Subsequence of `all` matching the debounced query; recomputed by the
    /// reducer whenever either input changes
    pub visible: Vec<Meal>,
    pub loading_state: LoadingState,
}

/// Background task status state
#[derive(Debug, Clone, Default)]
pub struct TaskState {
    pub status: Option<TaskStatus>,
}

#[derive(Debug, Clone)]
pub struct TaskStatus {
    pub message: String,
    pub status_type: TaskStatusType,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TaskStatusType {
    Running,
    Success,
    Error,
}

/// Debug console state (drop-down console fed by the log capture buffer)
#[derive(Debug, Clone)]
pub struct DebugConsoleState {
    pub is_open: bool,
    pub scroll_offset: usize,
    pub auto_scroll: bool,
    pub viewport_height: usize,
    pub logs: crate::log_capture::LogBuffer,
    /// Shared with the event handler so it can remap keys while the console
    /// is open
    pub open_shared: Arc<Mutex<bool>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadingState {
    #[default]
    Idle,
    Loading,
    Loaded,
    Error(String),
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            show_help: false,
            spinner_frame: 0,
            should_quit: false,
            help_open_shared: Arc::new(Mutex::new(false)),
        }
    }
}

impl Default for DebugConsoleState {
    fn default() -> Self {
        Self {
            is_open: false,
            scroll_offset: 0,
            auto_scroll: true,
            viewport_height: 20, // Updated during rendering for page scrolling
            logs: crate::log_capture::DebugConsoleLogger::create_buffer(),
            open_shared: Arc::new(Mutex::new(false)),
        }
    }
}
