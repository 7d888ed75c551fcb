use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::{App, Focus};

macro_rules! hints {
    ($($key:literal => $desc:literal),+ $(,)?) => {
        vec![$(($key, $desc)),+]
    };
}

fn get_context_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    match app.focus {
        Focus::Search => {
            hints!["Type" => "Search", "Esc/Enter" => "Back to Tabs", "Ctrl+C" => "Quit"]
        }
        Focus::TabBar if app.show_tab_numbers => {
            hints!["←/→" => "Switch Tab", "1-9" => "Jump to Tab", "/" => "Search", "↑/↓" => "Scroll", "q" => "Quit"]
        }
        Focus::TabBar => {
            hints!["←/→" => "Switch Tab", "/" => "Search", "↑/↓" => "Scroll", "q" => "Quit"]
        }
    }
}

fn build_styled_spans(hints: &[(&'static str, &'static str)]) -> Vec<Span<'static>> {
    let key_style = Style::default().fg(Color::Cyan);
    let desc_style = Style::default().fg(Color::Gray);
    let sep_style = Style::default().fg(Color::DarkGray);

    let mut spans = Vec::with_capacity(hints.len() * 4 + 1);
    spans.push(Span::raw(" "));

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" \u{2022} ", sep_style));
        }
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, desc_style));
    }

    spans
}

pub fn render_line(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_context_hints(app);
    let spans = build_styled_spans(&hints);
    let help = Paragraph::new(Line::from(spans));
    frame.render_widget(help, area);
}

#[cfg(test)]
#[path = "help_line_render_tests.rs"]
mod help_line_render_tests;
