use ratatui::{prelude::*, widgets::*};

use crate::App;
use crate::view_models::pagination::PaginationViewModel;

/// Render the pagination bar below the table
pub fn render_pagination(f: &mut Frame, area: Rect, app: &App) {
    let state = app.store.state();
    let theme = &state.theme;

    let view_model = PaginationViewModel::from_state(state);

    let control = |label: &str, enabled: bool| {
        if enabled {
            Span::styled(
                label.to_string(),
                Style::default()
                    .fg(theme.accent_primary)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(label.to_string(), theme.muted())
        }
    };

    let line = Line::from(vec![
        control("← Prev", view_model.prev_enabled),
        Span::styled(format!("   {}   ", view_model.label), theme.text()),
        control("Next →", view_model.next_enabled),
    ]);

    let bar = Paragraph::new(line)
        .centered()
        .block(Block::bordered().border_style(theme.panel_border()));

    f.render_widget(bar, area);
}
