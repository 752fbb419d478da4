use ratatui::{prelude::*, widgets::*};

use crate::App;
use crate::state::TaskStatusType;

const SPINNER_FRAMES: [&str; 4] = ["|", "/", "-", "\\"];

/// Render the one-line status bar at the very bottom
pub fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let state = app.store.state();
    let theme = &state.theme;

    let status_span = match &state.task.status {
        Some(status) => match status.status_type {
            TaskStatusType::Running => {
                let frame = SPINNER_FRAMES[state.ui.spinner_frame % SPINNER_FRAMES.len()];
                Span::styled(
                    format!("{} {}", frame, status.message),
                    Style::default().fg(theme.status_warning),
                )
            }
            TaskStatusType::Success => Span::styled(status.message.clone(), theme.success()),
            TaskStatusType::Error => Span::styled(status.message.clone(), theme.error()),
        },
        None => Span::styled("Ready", theme.muted()),
    };

    let line = Line::from(vec![
        status_span,
        Span::styled("  |  Ctrl+H Help  Ctrl+C Quit", theme.muted()),
    ]);

    f.render_widget(Paragraph::new(line), area);
}
