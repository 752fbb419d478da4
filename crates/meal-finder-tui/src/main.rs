use anyhow::Result;
use mealdb_client::MealDbClient;
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    crossterm::{
        self,
        event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    },
    layout::{Constraint, Direction, Layout},
    widgets::Paragraph,
};
use std::time::Duration;
use tokio::sync::mpsc;

use ::log::debug;

use crate::actions::Action;
use crate::config::Config;
use crate::debounce::Debouncer;
use crate::effect::execute_effect;
use crate::pager::PageState;
use crate::state::*;
use crate::store::Store;
use crate::task::{BackgroundTask, TaskResult, start_task_worker};
use crate::theme::Theme;

mod actions;
mod config;
mod debounce;
mod effect;
mod log_capture;
mod pager;
mod reducer;
mod search;
mod shortcuts;
mod state;
mod store;
mod task;
mod theme;
mod view_models;
mod views;

pub struct App {
    // Redux store - centralized state management
    pub store: Store,
    // Communication channels
    pub action_tx: mpsc::UnboundedSender<Action>,
    pub task_tx: mpsc::UnboundedSender<BackgroundTask>,
    // TheMealDB client, handed to the background worker per fetch
    pub client: MealDbClient,
    // Owns the pending debounce timer for the search query
    pub debouncer: Debouncer,
}

pub fn initialize_panic_handler() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        shutdown().unwrap();
        original_hook(panic_info);
    }));
}

fn startup() -> Result<()> {
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(std::io::stderr(), crossterm::terminal::EnterAlternateScreen)?;
    Ok(())
}

fn shutdown() -> Result<()> {
    crossterm::execute!(std::io::stderr(), crossterm::terminal::LeaveAlternateScreen)?;
    crossterm::terminal::disable_raw_mode()?;
    Ok(())
}

fn update(app: &mut App, msg: Action) -> Result<()> {
    // Pure Redux/Elm architecture: dispatch action to reducers, get effects back
    let effects = app.store.dispatch(msg);

    // Execute effects returned by reducers and dispatch follow-up actions
    for effect in effects {
        let follow_up_actions = execute_effect(app, effect)?;

        for action in follow_up_actions {
            // Action → Effects → Follow-up Actions → More Effects...
            let nested_effects = app.store.dispatch(action);
            for nested_effect in nested_effects {
                let nested_actions = execute_effect(app, nested_effect)?;
                for nested_action in nested_actions {
                    let _ = app.action_tx.send(nested_action);
                }
            }
        }
    }

    Ok(())
}

fn start_event_handler(app: &App, tx: mpsc::UnboundedSender<Action>) -> tokio::task::JoinHandle<()> {
    let tick_rate = std::time::Duration::from_millis(250);
    // Clone the shared overlay flags for the event loop
    let help_open_shared = app.store.state().ui.help_open_shared.clone();
    let console_open_shared = app.store.state().debug_console.open_shared.clone();

    tokio::spawn(async move {
        loop {
            let action = if crossterm::event::poll(tick_rate).unwrap_or(false) {
                let help_open = *help_open_shared.lock().unwrap();
                let console_open = *console_open_shared.lock().unwrap();
                handle_events(help_open, console_open).unwrap_or(Action::None)
            } else {
                Action::None
            };

            if tx.send(action).is_err() {
                break;
            }
        }
    })
}

/// Convert TaskResult to Action - the single place where task results become actions
fn result_to_action(result: TaskResult) -> Action {
    match result {
        TaskResult::MealsFetched(result) => Action::MealsLoaded(result),
    }
}

async fn run_with_log_buffer(log_buffer: log_capture::LogBuffer) -> Result<()> {
    let mut t = Terminal::new(CrosstermBackend::new(std::io::stderr()))?;

    let (action_tx, mut action_rx) = mpsc::unbounded_channel();
    let (task_tx, task_rx) = mpsc::unbounded_channel();
    let (result_tx, mut result_rx) = mpsc::unbounded_channel();

    let mut app = App::new(action_tx.clone(), task_tx, log_buffer);

    let event_task = start_event_handler(&app, app.action_tx.clone());
    // Aborting the worker on shutdown also cancels any in-flight request
    let worker_task = start_task_worker(task_rx, result_tx);

    app.action_tx
        .send(Action::Bootstrap)
        .expect("Failed to send bootstrap action");

    loop {
        // Sync the shared overlay flags for the event handler
        *app.store.state().ui.help_open_shared.lock().unwrap() = app.store.state().ui.show_help;
        *app.store.state().debug_console.open_shared.lock().unwrap() =
            app.store.state().debug_console.is_open;

        t.draw(|f| {
            ui(f, &mut app);
        })?;

        // Handle both actions and task results; results first so a finished
        // fetch lands before queued input
        let maybe_action = tokio::time::timeout(std::time::Duration::from_millis(100), async {
            tokio::select! {
                biased;
                Some(result) = result_rx.recv() => Some(result_to_action(result)),
                Some(action) = action_rx.recv() => Some(action),
                else => None
            }
        })
        .await;

        match maybe_action {
            Ok(Some(action)) => {
                if let Err(err) = update(&mut app, action) {
                    app.store.state_mut().meals.loading_state =
                        LoadingState::Error(err.to_string());
                    app.store.state_mut().ui.should_quit = true;
                    debug!("Error updating app: {}", err);
                }
            }
            Ok(None) => break, // Channel closed
            Err(_) => {
                // Timeout - tick spinner animation
                let _ = app.action_tx.send(Action::TickSpinner);
            }
        }

        if app.store.state().ui.should_quit {
            break;
        }
    }

    event_task.abort();
    worker_task.abort();

    Ok(())
}

fn ui(f: &mut Frame, app: &mut App) {
    let theme = app.store.state().theme.clone();

    match &app.store.state().meals.loading_state {
        // Full-screen states until the listing has arrived
        LoadingState::Idle | LoadingState::Loading => {
            f.render_widget(
                Paragraph::new("Loading...").style(theme.text()).centered(),
                f.area(),
            );
        }
        LoadingState::Error(message) => {
            f.render_widget(
                Paragraph::new(message.clone()).style(theme.error()).centered(),
                f.area(),
            );
        }
        LoadingState::Loaded => {
            let paginated = app.store.state().config.paginated;

            // Search bar on top, table in the middle, pagination and status at
            // the bottom
            let constraints = if paginated {
                vec![
                    Constraint::Length(3), // Search bar
                    Constraint::Min(0),    // Meal table
                    Constraint::Length(3), // Pagination bar
                    Constraint::Length(1), // Status line
                ]
            } else {
                vec![
                    Constraint::Length(3),
                    Constraint::Min(0),
                    Constraint::Length(1),
                ]
            };

            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints(constraints)
                .split(f.area());

            crate::views::search_bar::render_search_bar(f, chunks[0], app);
            crate::views::meal_table::render_meal_table(f, chunks[1], app);

            if paginated {
                crate::views::pagination::render_pagination(f, chunks[2], app);
                crate::views::status_bar::render_status_bar(f, chunks[3], app);
            } else {
                crate::views::status_bar::render_status_bar(f, chunks[2], app);
            }
        }
    }

    // Overlays render over every base screen, the error screen included (the
    // debug console carries the error detail)

    if app.store.state().ui.show_help {
        crate::views::help::render_help_panel(f, f.area(), &theme);
    }

    // Render debug console (drop-down) last if visible
    if app.store.state().debug_console.is_open {
        let viewport_height = crate::views::debug_console::render_debug_console(f, f.area(), app);
        app.store
            .dispatch(Action::UpdateDebugConsoleViewport(viewport_height));
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize debug console logger before anything else
    let log_buffer = log_capture::init_logger();

    initialize_panic_handler();
    startup()?;
    run_with_log_buffer(log_buffer).await?;
    shutdown()?;
    Ok(())
}

impl App {
    fn new(
        action_tx: mpsc::UnboundedSender<Action>,
        task_tx: mpsc::UnboundedSender<BackgroundTask>,
        log_buffer: log_capture::LogBuffer,
    ) -> App {
        let config = Config::load();

        let client = MealDbClient::with_base_url(config.base_url.clone());
        let debouncer = Debouncer::new(
            Duration::from_millis(config.debounce_ms),
            action_tx.clone(),
        );

        let initial_state = AppState {
            pager: PageState::new(config.page_size),
            debug_console: DebugConsoleState {
                logs: log_buffer,
                ..DebugConsoleState::default()
            },
            config,
            theme: Theme::default(),
            ..AppState::default()
        };

        App {
            store: Store::new(initial_state),
            action_tx,
            task_tx,
            client,
            debouncer,
        }
    }
}

fn handle_events(help_open: bool, console_open: bool) -> Result<Action> {
    Ok(match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            handle_key_event(key, help_open, console_open)
        }
        _ => Action::None,
    })
}

fn handle_key_event(key: KeyEvent, help_open: bool, console_open: bool) -> Action {
    // Ctrl+C always quits
    if matches!(key.code, KeyCode::Char('c')) && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }

    // Handle debug console keys first if the console is open
    if console_open {
        return match key.code {
            KeyCode::Esc => Action::ToggleDebugConsole,
            KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Action::ToggleDebugConsole
            }
            KeyCode::Char('j') | KeyCode::Down => Action::ScrollDebugConsoleDown,
            KeyCode::Char('k') | KeyCode::Up => Action::ScrollDebugConsoleUp,
            KeyCode::Char('a') => Action::ToggleDebugAutoScroll,
            KeyCode::Char('c') => Action::ClearDebugLogs,
            _ => Action::None,
        };
    }

    // Handle help overlay keys if the help panel is open
    if help_open {
        return match key.code {
            KeyCode::Esc => Action::ToggleHelp,
            KeyCode::Char('h') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Action::ToggleHelp
            }
            _ => Action::None,
        };
    }

    match key.code {
        KeyCode::Char('h') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::ToggleHelp,
        KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Action::ToggleDebugConsole
        }

        // Pagination
        KeyCode::Left | KeyCode::PageUp => Action::PreviousPage,
        KeyCode::Right | KeyCode::PageDown => Action::NextPage,
        KeyCode::Home => Action::GoToPage(1),
        KeyCode::End => Action::GoToPage(usize::MAX),

        // Search input
        KeyCode::Esc => Action::ClearQuery,
        KeyCode::Backspace => Action::QueryBackspace,
        KeyCode::Char(c)
            if !key.modifiers.contains(KeyModifiers::CONTROL)
                && !key.modifiers.contains(KeyModifiers::ALT) =>
        {
            Action::QueryInput(c)
        }

        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_plain_chars_feed_the_query() {
        assert!(matches!(
            handle_key_event(key(KeyCode::Char('c')), false, false),
            Action::QueryInput('c')
        ));
        assert!(matches!(
            handle_key_event(key(KeyCode::Backspace), false, false),
            Action::QueryBackspace
        ));
        assert!(matches!(
            handle_key_event(key(KeyCode::Esc), false, false),
            Action::ClearQuery
        ));
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        assert!(matches!(handle_key_event(ctrl('c'), false, false), Action::Quit));
        assert!(matches!(handle_key_event(ctrl('c'), true, false), Action::Quit));
        assert!(matches!(handle_key_event(ctrl('c'), false, true), Action::Quit));
    }

    #[test]
    fn test_pagination_keys() {
        assert!(matches!(
            handle_key_event(key(KeyCode::Right), false, false),
            Action::NextPage
        ));
        assert!(matches!(
            handle_key_event(key(KeyCode::Left), false, false),
            Action::PreviousPage
        ));
        assert!(matches!(
            handle_key_event(key(KeyCode::Home), false, false),
            Action::GoToPage(1)
        ));
        assert!(matches!(
            handle_key_event(key(KeyCode::End), false, false),
            Action::GoToPage(usize::MAX)
        ));
    }

    #[test]
    fn test_console_captures_plain_keys_when_open() {
        assert!(matches!(
            handle_key_event(key(KeyCode::Char('j')), false, true),
            Action::ScrollDebugConsoleDown
        ));
        assert!(matches!(
            handle_key_event(key(KeyCode::Char('c')), false, true),
            Action::ClearDebugLogs
        ));
        // Typing into the query is suspended while the console is open
        assert!(matches!(
            handle_key_event(key(KeyCode::Char('x')), false, true),
            Action::None
        ));
    }

    #[test]
    fn test_help_overlay_swallows_input() {
        assert!(matches!(
            handle_key_event(key(KeyCode::Esc), true, false),
            Action::ToggleHelp
        ));
        assert!(matches!(
            handle_key_event(key(KeyCode::Char('x')), true, false),
            Action::None
        ));
    }

    fn test_app() -> App {
        let (action_tx, _action_rx) = mpsc::unbounded_channel();
        let (task_tx, _task_rx) = mpsc::unbounded_channel();
        App::new(
            action_tx,
            task_tx,
            log_capture::DebugConsoleLogger::create_buffer(),
        )
    }

    fn draw_to_text(app: &mut App) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn curry() -> Vec<mealdb_client::Meal> {
        vec![mealdb_client::Meal {
            id: "1".to_string(),
            name: "Chicken Curry".to_string(),
            thumbnail_url: "https://example.test/1.jpg".to_string(),
        }]
    }

    #[test]
    fn test_loaded_screen_renders_all_regions() {
        let mut app = test_app();
        let _ = app.store.dispatch(Action::MealsLoaded(Ok(curry())));

        let text = draw_to_text(&mut app);
        assert!(text.contains("Chicken Curry"));
        assert!(text.contains("Page 1 of 1"));
        assert!(text.contains("Loaded 1 meals"));
    }

    #[test]
    fn test_debug_console_renders_over_error_screen() {
        let mut app = test_app();
        let _ = app
            .store
            .dispatch(Action::MealsLoaded(Err("Failed to fetch meals".to_string())));

        let text = draw_to_text(&mut app);
        assert!(text.contains("Failed to fetch meals"));

        // The console must still open on the error screen; it drops down over
        // the top of it
        let _ = app.store.dispatch(Action::ToggleDebugConsole);
        let text = draw_to_text(&mut app);
        assert!(text.contains("Debug Console"));
    }

    #[test]
    fn test_help_renders_over_loading_screen() {
        let mut app = test_app();
        let _ = app.store.dispatch(Action::ToggleHelp);

        let text = draw_to_text(&mut app);
        assert!(text.contains("Loading..."));
        assert!(text.contains("Keyboard Shortcuts"));
    }
}
