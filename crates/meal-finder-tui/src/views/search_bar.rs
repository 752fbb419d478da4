use ratatui::{prelude::*, widgets::*};

use crate::App;

/// Render the search input at the top of the screen
pub fn render_search_bar(f: &mut Frame, area: Rect, app: &App) {
    let state = app.store.state();
    let theme = &state.theme;

    let query = &state.search.query;

    // Block cursor at the end of the input
    let line = Line::from(vec![
        Span::styled(query.clone(), theme.text()),
        Span::styled(" ", Style::default().bg(theme.accent_primary)),
    ]);

    let hint = if query.is_empty() {
        " Search meals (type to filter, Esc clears) "
    } else {
        " Search meals "
    };

    let input = Paragraph::new(line).block(
        Block::bordered()
            .title(hint)
            .title_style(theme.panel_title())
            .border_style(theme.panel_border()),
    );

    f.render_widget(input, area);
}
