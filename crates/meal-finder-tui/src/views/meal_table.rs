use ratatui::{prelude::*, widgets::*};

use crate::App;
use crate::view_models::meal_table::{MealTableViewModel, NO_MEALS_MESSAGE};

/// Render the meal table for the current page (or the whole visible set when
/// pagination is disabled)
pub fn render_meal_table(f: &mut Frame, area: Rect, app: &App) {
    let state = app.store.state();
    let theme = &state.theme;

    let view_model = MealTableViewModel::from_state(state);

    if view_model.is_empty() {
        let empty = Paragraph::new(NO_MEALS_MESSAGE)
            .style(theme.muted())
            .centered()
            .block(
                Block::bordered()
                    .title(view_model.title)
                    .title_style(theme.panel_title())
                    .border_style(theme.panel_border()),
            );
        f.render_widget(empty, area);
        return;
    }

    let header = Row::new(vec!["ID", "Name", "Thumbnail"])
        .style(theme.table_header())
        .height(1);

    let rows: Vec<Row> = view_model
        .rows
        .iter()
        .enumerate()
        .map(|(i, meal)| {
            let bg = if i % 2 == 0 {
                theme.table_row_bg_normal
            } else {
                theme.table_row_bg_alt
            };
            Row::new(vec![
                meal.id.clone(),
                meal.name.clone(),
                meal.thumbnail_url.clone(),
            ])
            .style(theme.table_row().bg(bg))
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(8),
            Constraint::Min(24),
            Constraint::Percentage(50),
        ],
    )
    .header(header)
    .block(
        Block::bordered()
            .title(view_model.title)
            .title_style(theme.panel_title())
            .border_style(theme.panel_border()),
    );

    f.render_widget(table, area);
}
