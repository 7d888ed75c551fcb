use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::tab_state::ACTIVE_CLASS;
use crate::app::{App, Focus};

pub const TAB_BAR_HEIGHT: u16 = 3;

const DIVIDER: &str = "│";

/// Renders one label per tab and returns the rect of each label
///
/// Styling is read from the document: a tab is drawn as active when it
/// carries the `active` class.
pub fn render_bar(app: &App, frame: &mut Frame, area: Rect) -> Vec<Rect> {
    let border_color = if app.focus == Focus::TabBar {
        Color::LightCyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let labels = app.tabs.labels(&app.document);
    let mut spans = Vec::with_capacity(labels.len() * 2);
    let mut rects = Vec::with_capacity(labels.len());
    let mut x = inner.x;

    for (index, (label, &tab)) in labels.iter().zip(app.tabs.tabs()).enumerate() {
        if index > 0 {
            let divider = Span::styled(DIVIDER, Style::default().fg(Color::DarkGray));
            x = x.saturating_add(divider.width() as u16);
            spans.push(divider);
        }

        let text = if app.show_tab_numbers {
            format!(" {} {} ", index + 1, label)
        } else {
            format!(" {} ", label)
        };

        let style = if app.document.has_class(tab, ACTIVE_CLASS) {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };

        let span = Span::styled(text, style);
        let width = span.width() as u16;
        rects.push(Rect {
            x: x.min(inner.right()),
            y: inner.y,
            width: width.min(inner.right().saturating_sub(x)),
            height: inner.height.min(1),
        });
        x = x.saturating_add(width);
        spans.push(span);
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), inner);
    rects
}
