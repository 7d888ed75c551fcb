use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::App;
use crate::document::{Document, NodeId};
use crate::search::{Banner, BannerKind, HIGHLIGHT_CLASS};

/// Elements that start and end on their own line
const BLOCK_TAGS: &[&str] = &[
    "address", "article", "aside", "blockquote", "details", "div", "dd", "dl", "dt",
    "fieldset", "figcaption", "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6",
    "header", "hr", "li", "main", "nav", "ol", "p", "pre", "section", "summary", "table",
    "tr", "ul",
];

const BOLD_TAGS: &[&str] = &[
    "b", "strong", "th", "h1", "h2", "h3", "h4", "h5", "h6", "summary",
];

const ITALIC_TAGS: &[&str] = &["em", "i", "cite"];

/// Accumulates spans into lines while walking the tree
struct LineBuilder<'a> {
    banner: Option<&'a Banner>,
    lines: Vec<Line<'static>>,
    current: Vec<Span<'static>>,
    /// Inside `<pre>`, whitespace and newlines are kept
    preformatted: usize,
}

impl<'a> LineBuilder<'a> {
    fn new(banner: Option<&'a Banner>) -> Self {
        Self {
            banner,
            lines: Vec::new(),
            current: Vec::new(),
            preformatted: 0,
        }
    }

    fn ends_with_space(&self) -> bool {
        match self.current.last() {
            Some(span) => span.content.ends_with(' '),
            None => true,
        }
    }

    fn push_span(&mut self, text: String, style: Style) {
        if !text.is_empty() {
            self.current.push(Span::styled(text, style));
        }
    }

    /// Adds text with runs of whitespace collapsed to one space
    fn push_text(&mut self, text: &str, style: Style) {
        if self.preformatted > 0 {
            let mut pieces = text.split('\n');
            if let Some(first) = pieces.next() {
                self.push_span(first.to_string(), style);
            }
            for piece in pieces {
                self.end_line();
                self.push_span(piece.to_string(), style);
            }
            return;
        }

        let mut collapsed = String::with_capacity(text.len());
        let mut last_was_space = self.ends_with_space();
        for c in text.chars() {
            if c.is_whitespace() {
                if !last_was_space {
                    collapsed.push(' ');
                    last_was_space = true;
                }
            } else {
                collapsed.push(c);
                last_was_space = false;
            }
        }
        self.push_span(collapsed, style);
    }

    /// Ends the current line unless it is empty
    fn break_line(&mut self) {
        if !self.current.is_empty() {
            self.end_line();
        }
    }

    fn end_line(&mut self) {
        let mut spans = std::mem::take(&mut self.current);
        if self.preformatted == 0
            && let Some(last) = spans.last_mut()
            && last.content.ends_with(' ')
        {
            let trimmed = last.content.trim_end().to_string();
            last.content = trimmed.into();
        }
        self.lines.push(Line::from(spans));
    }

    fn banner_style(&self, node: NodeId) -> Option<Style> {
        let banner = self.banner.filter(|banner| banner.node == node)?;
        Some(match banner.kind {
            BannerKind::Results { .. } => Style::default()
                .fg(Color::Black)
                .bg(Color::LightGreen)
                .add_modifier(Modifier::BOLD),
            BannerKind::NoResults => Style::default()
                .fg(Color::Black)
                .bg(Color::LightRed)
                .add_modifier(Modifier::BOLD),
        })
    }

    fn walk(&mut self, doc: &Document, node: NodeId, style: Style) {
        if let Some(text) = doc.text(node) {
            self.push_text(text, style);
            return;
        }
        let Some(element) = doc.element(node) else {
            return;
        };
        let tag = element.tag.as_str();

        if tag == "br" {
            self.end_line();
            return;
        }

        let is_block = BLOCK_TAGS.contains(&tag);
        if is_block {
            self.break_line();
        }

        let mut style = style;
        if BOLD_TAGS.contains(&tag) {
            style = style.add_modifier(Modifier::BOLD);
        }
        if ITALIC_TAGS.contains(&tag) {
            style = style.add_modifier(Modifier::ITALIC);
        }
        if tag == "a" {
            style = style.fg(Color::LightBlue).add_modifier(Modifier::UNDERLINED);
        }
        if element.has_class(HIGHLIGHT_CLASS) {
            style = style.fg(Color::Black).bg(Color::Yellow);
        }
        if let Some(banner_style) = self.banner_style(node) {
            style = banner_style;
        }

        match tag {
            "li" => self.push_span("• ".to_string(), style),
            "td" | "th" if !self.current.is_empty() => {
                self.push_span(" │ ".to_string(), Style::default().fg(Color::DarkGray));
            }
            "hr" => self.push_span("─".repeat(40), Style::default().fg(Color::DarkGray)),
            _ => {}
        }

        if tag == "pre" {
            self.preformatted += 1;
        }
        for &child in doc.children(node) {
            self.walk(doc, child, style);
        }
        if tag == "pre" {
            self.preformatted -= 1;
        }

        if is_block {
            self.break_line();
        }
    }
}

/// Lines for the subtree under `panel`, with the banner styled by its outcome
pub fn panel_lines(doc: &Document, panel: NodeId, banner: Option<&Banner>) -> Vec<Line<'static>> {
    let mut builder = LineBuilder::new(banner);
    for &child in doc.children(panel) {
        builder.walk(doc, child, Style::default());
    }
    builder.break_line();
    builder.lines
}

/// Rows the paragraph occupies once word-wrapped to `width`
fn wrapped_height(paragraph: &Paragraph<'_>, width: u16) -> u32 {
    u32::try_from(paragraph.line_count(width)).unwrap_or(u32::MAX)
}

/// Renders the active panel and returns the area it occupies
pub fn render_panel(app: &mut App, frame: &mut Frame, area: Rect) -> Rect {
    let title = app
        .tabs
        .labels(&app.document)
        .get(app.tabs.active_index())
        .map(|label| format!(" {} ", label))
        .unwrap_or_default();

    let lines = match app.active_panel() {
        Some(panel) => panel_lines(&app.document, panel, app.search.banner()),
        None => Vec::new(),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(Color::Cyan));

    // Measured without the block so only text rows are counted
    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    let inner = block.inner(area);
    app.panel_scroll
        .update_bounds(wrapped_height(&paragraph, inner.width), inner.height);

    let paragraph = paragraph
        .block(block)
        .scroll((app.panel_scroll.offset, 0));

    frame.render_widget(paragraph, area);
    area
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::parse_html;
    use crate::test_utils::test_helpers::test_app;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use std::time::Instant;

    fn line_texts(lines: &[Line<'_>]) -> Vec<String> {
        lines.iter().map(|line| line.to_string()).collect()
    }

    fn lines_for(html: &str) -> Vec<String> {
        let doc = parse_html(html);
        let panel = doc.find_by_class(doc.root(), "tab-panel")[0];
        line_texts(&panel_lines(&doc, panel, None))
    }

    #[test]
    fn test_blocks_start_new_lines() {
        let lines = lines_for(
            "<div class=\"tab-panel\">\n  <h2>Title</h2>\n  <p>First   paragraph\n text.</p>\n  <p>Second</p>\n</div>",
        );
        assert_eq!(lines, vec!["Title", "First paragraph text.", "Second"]);
    }

    #[test]
    fn test_inline_elements_stay_on_line() {
        let lines = lines_for(
            "<div class=\"tab-panel\"><p>Welcome to the <strong>overview</strong> page.</p></div>",
        );
        assert_eq!(lines, vec!["Welcome to the overview page."]);
    }

    #[test]
    fn test_list_items_and_breaks() {
        let lines = lines_for(
            "<div class=\"tab-panel\"><ul><li>one</li><li>two<br>three</li></ul></div>",
        );
        assert_eq!(lines, vec!["• one", "• two", "three"]);
    }

    #[test]
    fn test_table_cells_are_separated() {
        let lines = lines_for(
            "<div class=\"tab-panel\"><table><tr><th>Name</th><th>Price</th></tr><tr><td>Tea</td><td>3</td></tr></table></div>",
        );
        assert_eq!(lines, vec!["Name │ Price", "Tea │ 3"]);
    }

    #[test]
    fn test_preformatted_keeps_whitespace() {
        let lines = lines_for("<div class=\"tab-panel\"><pre>a  b\n  c</pre></div>");
        assert_eq!(lines, vec!["a  b", "  c"]);
    }

    #[test]
    fn test_highlights_are_styled() {
        let mut app = test_app();
        crate::tabs::tab_events::handle_activation_request(&mut app, 1);
        app.search
            .search(&mut app.document, &app.tabs, "hello", Instant::now());

        let panel = app.active_panel().unwrap();
        let lines = panel_lines(&app.document, panel, app.search.banner());

        let texts = line_texts(&lines);
        assert_eq!(
            texts,
            vec![
                "Suchergebnisse für \"hello\" gefunden (2 Treffer)",
                "Hello world, hello again."
            ]
        );

        let highlighted: Vec<_> = lines[1]
            .spans
            .iter()
            .filter(|span| span.style.bg == Some(Color::Yellow))
            .map(|span| span.content.to_string())
            .collect();
        assert_eq!(highlighted, vec!["Hello", "hello"]);
        assert_eq!(lines[0].spans[0].style.bg, Some(Color::LightGreen));
    }

    #[test]
    fn test_no_results_banner_is_red() {
        let mut app = test_app();
        app.search
            .search(&mut app.document, &app.tabs, "xyz", Instant::now());

        let panel = app.active_panel().unwrap();
        let lines = panel_lines(&app.document, panel, app.search.banner());

        assert_eq!(lines[0].to_string(), "Keine Suchergebnisse für \"xyz\" gefunden.");
        assert_eq!(lines[0].spans[0].style.bg, Some(Color::LightRed));
    }

    #[test]
    fn test_wrapped_height_breaks_at_words() {
        let paragraph = Paragraph::new(vec![
            Line::from("aaaaaa bbbbbb cccccc"),
            Line::from("short"),
        ])
        .wrap(Wrap { trim: false });

        // Character count alone would give 2 + 1
        assert_eq!(wrapped_height(&paragraph, 10), 3 + 1);
    }

    #[test]
    fn test_render_panel_shows_active_content() {
        let mut app = test_app();
        let mut terminal = Terminal::new(TestBackend::new(60, 10)).unwrap();

        terminal
            .draw(|f| {
                render_panel(&mut app, f, f.area());
            })
            .unwrap();

        let output = terminal.backend().to_string();
        assert!(output.contains(" Overview "));
        assert!(output.contains("Welcome to the overview page."));
        assert!(!output.contains("Hello world"));
    }

    #[test]
    fn test_jump_to_bottom_reaches_last_line() {
        let mut body = String::from(
            "<button class=\"tab-button\">Long</button><div class=\"tab-panel\">",
        );
        for n in 0..12 {
            body.push_str(&format!("<p>aaaaaaaaaaaa bbbbbbbbbbbb cccccccccccc {}</p>", n));
        }
        body.push_str("<p>ENDMARK</p></div>");
        let mut app = crate::app::App::new(parse_html(&body), &crate::config::Config::default())
            .unwrap();
        let mut terminal = Terminal::new(TestBackend::new(24, 16)).unwrap();

        terminal
            .draw(|f| {
                render_panel(&mut app, f, f.area());
            })
            .unwrap();
        app.panel_scroll.jump_to_bottom();
        terminal
            .draw(|f| {
                render_panel(&mut app, f, f.area());
            })
            .unwrap();

        let output = terminal.backend().to_string();
        assert!(output.contains("ENDMARK"));
        assert!(output.contains("cccccccccccc 11"));
    }
}
