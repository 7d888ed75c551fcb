use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders},
};

use crate::app::{App, Focus};

pub const SEARCH_BAR_HEIGHT: u16 = 3;

/// Renders the search field and returns the area it occupies
pub fn render_bar(app: &mut App, frame: &mut Frame, area: Rect) -> Rect {
    let focused = app.focus == Focus::Search;
    let has_query = !app.search.query().trim().is_empty();
    let count = app.search.highlight_count();

    let border_color = if focused {
        Color::LightMagenta
    } else {
        Color::DarkGray
    };

    let count_style = if has_query && count == 0 {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::Gray)
    };

    let title = if focused {
        " Search: "
    } else {
        " Search (Ctrl+K): "
    };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(Color::Black));

    if has_query {
        block = block.title_top(
            Line::from(Span::styled(format!(" {} Treffer ", count), count_style))
                .alignment(Alignment::Right),
        );
    }

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let search_textarea = app.search.search_textarea_mut();
    search_textarea.set_style(Style::default().fg(Color::White).bg(Color::Black));
    search_textarea.set_cursor_line_style(Style::default());

    if focused {
        search_textarea.set_cursor_style(Style::default().add_modifier(Modifier::REVERSED));
    } else {
        search_textarea.set_cursor_style(Style::default());
    }

    frame.render_widget(&*search_textarea, inner_area);
    area
}
