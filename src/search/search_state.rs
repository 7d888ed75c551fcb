use ratatui::style::{Modifier, Style};
use std::time::{Duration, Instant};
use tui_textarea::TextArea;

use super::banner::{BANNER_CLASS, Banner, BannerKind, no_results_message, results_message};
use super::highlight::{clear_highlights, collect_text_runs, highlight_runs};
use super::matcher::SearchMatcher;
use crate::document::{Document, NodeId};
use crate::tabs::TabState;

/// Default delay before the no-results banner disappears
pub const DEFAULT_NO_RESULTS_DISMISS: Duration = Duration::from_secs(4);

/// Creates a TextArea configured for search input.
fn create_search_textarea() -> TextArea<'static> {
    let mut textarea = TextArea::default();
    textarea.set_cursor_line_style(Style::default());
    textarea.set_cursor_style(Style::default().add_modifier(Modifier::REVERSED));
    textarea
}

/// Query text, live highlights and the results banner
///
/// At most one highlight pass is live at a time: every search starts by
/// clearing the previous one.
pub struct SearchState {
    /// Search query text input
    search_textarea: TextArea<'static>,
    /// Highlight elements currently in the document
    highlights: Vec<NodeId>,
    banner: Option<Banner>,
    /// Query of the last pass, to skip re-searching on cursor-only edits
    last_query: String,
    no_results_dismiss: Duration,
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new(DEFAULT_NO_RESULTS_DISMISS)
    }
}

impl SearchState {
    pub fn new(no_results_dismiss: Duration) -> Self {
        Self {
            search_textarea: create_search_textarea(),
            highlights: Vec::new(),
            banner: None,
            last_query: String::new(),
            no_results_dismiss,
        }
    }

    /// Returns the current text of the search field
    pub fn query(&self) -> &str {
        self.search_textarea
            .lines()
            .first()
            .map(|s| s.as_str())
            .unwrap_or("")
    }

    /// Returns a mutable reference to the search TextArea for input handling
    pub fn search_textarea_mut(&mut self) -> &mut TextArea<'static> {
        &mut self.search_textarea
    }

    pub fn highlights(&self) -> &[NodeId] {
        &self.highlights
    }

    pub fn highlight_count(&self) -> usize {
        self.highlights.len()
    }

    pub fn banner(&self) -> Option<&Banner> {
        self.banner.as_ref()
    }

    /// Highlights `query` inside the active panel and updates the banner
    ///
    /// A blank query only clears. The query itself is matched untrimmed.
    pub fn search(&mut self, doc: &mut Document, tabs: &TabState, query: &str, now: Instant) {
        self.last_query = query.to_string();
        self.clear(doc);

        if query.trim().is_empty() {
            return;
        }

        let Some(panel) = tabs.active_panel(doc) else {
            return;
        };

        let runs = collect_text_runs(doc, panel);
        if let Some(matcher) = SearchMatcher::new(query) {
            self.highlights = highlight_runs(doc, &runs, &matcher);
        }

        #[cfg(debug_assertions)]
        log::debug!(
            "Search: '{}' scanned {} runs, {} highlights",
            query,
            runs.len(),
            self.highlights.len()
        );

        if self.highlights.is_empty() {
            self.show_no_results(doc, panel, query, now);
        } else {
            self.show_results(doc, panel, query);
        }
    }

    /// Re-runs the search when the text field changed since the last pass
    ///
    /// Returns true when a pass ran.
    pub fn update_from_input(&mut self, doc: &mut Document, tabs: &TabState, now: Instant) -> bool {
        let query = self.query().to_string();
        if query == self.last_query {
            return false;
        }
        self.search(doc, tabs, &query, now);
        true
    }

    /// Re-runs the current query against whichever panel is active now
    pub fn refresh(&mut self, doc: &mut Document, tabs: &TabState, now: Instant) {
        let query = self.query().to_string();
        self.search(doc, tabs, &query, now);
    }

    /// Removes all highlights and the banner, keeping the query text
    pub fn clear(&mut self, doc: &mut Document) {
        let highlights = std::mem::take(&mut self.highlights);
        clear_highlights(doc, &highlights);
        self.remove_banner(doc);
    }

    /// Clears highlights and banner and empties the search field
    pub fn reset(&mut self, doc: &mut Document) {
        self.clear(doc);
        self.search_textarea.select_all();
        self.search_textarea.cut();
        self.last_query.clear();
    }

    /// Removes an expired no-results banner; returns true if one was removed
    pub fn poll_expiry(&mut self, doc: &mut Document, now: Instant) -> bool {
        if self.banner.as_ref().is_some_and(|banner| banner.is_expired(now)) {
            #[cfg(debug_assertions)]
            log::debug!("Search: no-results banner dismissed");

            self.remove_banner(doc);
            return true;
        }
        false
    }

    fn show_results(&mut self, doc: &mut Document, panel: NodeId, query: &str) {
        let count = self.highlights.len();
        let message = results_message(query, count);
        self.place_banner(doc, panel, &message, BannerKind::Results { count }, None);
    }

    fn show_no_results(&mut self, doc: &mut Document, panel: NodeId, query: &str, now: Instant) {
        let message = no_results_message(query);
        let deadline = now + self.no_results_dismiss;
        self.place_banner(doc, panel, &message, BannerKind::NoResults, Some(deadline));
    }

    /// Inserts a fresh banner as the panel's first child
    ///
    /// Every pass starts with `clear()`, which drops the previous banner, so
    /// there is never an old one to update.
    fn place_banner(
        &mut self,
        doc: &mut Document,
        panel: NodeId,
        message: &str,
        kind: BannerKind,
        dismiss_at: Option<Instant>,
    ) {
        debug_assert!(self.banner.is_none(), "banner placed without clearing");

        let node = doc.create_element_with_class("div", BANNER_CLASS);
        let text = doc.create_text(message);
        doc.append_child(node, text);
        let first = doc.first_child(panel);
        doc.insert_before(panel, node, first);

        self.banner = Some(Banner {
            node,
            kind,
            dismiss_at,
        });
    }

    /// Dropping the banner also drops its pending dismissal
    fn remove_banner(&mut self, doc: &mut Document) {
        if let Some(banner) = self.banner.take() {
            doc.free(banner.node);
        }
    }
}

#[cfg(test)]
#[path = "search_state_tests.rs"]
mod search_state_tests;
