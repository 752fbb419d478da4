use ratatui::{
    layout::{Margin, Rect},
    prelude::*,
    widgets::*,
};

use crate::shortcuts::get_shortcuts;

/// Render the shortcuts help panel as a centered floating window
pub fn render_help_panel(f: &mut Frame, area: Rect, theme: &crate::theme::Theme) {
    // Centered area (70% width, 80% height)
    let popup_width = (area.width * 70 / 100).min(80);
    let popup_height = (area.height * 80 / 100).min(30);
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    let popup_area = Rect {
        x: area.x + popup_x,
        y: area.y + popup_y,
        width: popup_width,
        height: popup_height,
    };

    f.render_widget(Clear, popup_area);
    f.render_widget(
        Block::default().style(Style::default().bg(theme.bg_panel)),
        popup_area,
    );

    let inner = popup_area.inner(Margin {
        horizontal: 2,
        vertical: 1,
    });

    let mut text_lines = Vec::new();

    for category in get_shortcuts() {
        text_lines.push(Line::from(vec![Span::styled(
            category.name,
            Style::default()
                .fg(theme.status_warning)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )]));
        text_lines.push(Line::from(""));

        for shortcut in category.shortcuts {
            text_lines.push(Line::from(vec![
                Span::styled(
                    format!("  {:20}", shortcut.key_display),
                    Style::default()
                        .fg(theme.status_success)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    shortcut.description,
                    Style::default().fg(theme.text_secondary),
                ),
            ]));
        }

        text_lines.push(Line::from(""));
    }

    text_lines.push(Line::from(vec![
        Span::styled("Press ", Style::default().fg(theme.text_muted)),
        Span::styled(
            "Ctrl+H",
            Style::default()
                .fg(theme.accent_primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" or ", Style::default().fg(theme.text_muted)),
        Span::styled(
            "Esc",
            Style::default()
                .fg(theme.accent_primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" to close this help", Style::default().fg(theme.text_muted)),
    ]));

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Keyboard Shortcuts ")
        .title_style(
            Style::default()
                .fg(theme.accent_primary)
                .add_modifier(Modifier::BOLD),
        )
        .border_style(
            Style::default()
                .fg(theme.accent_primary)
                .add_modifier(Modifier::BOLD),
        )
        .style(Style::default().bg(theme.bg_panel));

    f.render_widget(block, popup_area);

    let paragraph = Paragraph::new(text_lines)
        .wrap(Wrap { trim: false })
        .style(Style::default().bg(theme.bg_panel));

    f.render_widget(paragraph, inner);
}
