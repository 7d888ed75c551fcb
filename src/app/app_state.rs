use std::time::Instant;

use crate::config::Config;
use crate::document::{Document, NodeId};
use crate::error::TabviewError;
use crate::layout::LayoutRegions;
use crate::notification::NotificationState;
use crate::scroll::ScrollState;
use crate::search::SearchState;
use crate::tabs::TabState;

/// Which control receives key presses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The active tab button
    TabBar,
    /// The search field
    Search,
}

/// One browsing session over a single loaded document
pub struct App {
    pub document: Document,
    pub tabs: TabState,
    pub search: SearchState,
    pub focus: Focus,
    pub panel_scroll: ScrollState,
    pub notification: NotificationState,
    pub layout_regions: LayoutRegions,
    pub show_tab_numbers: bool,
    pub should_quit: bool,
}

impl App {
    /// Takes ownership of the document and activates its first tab
    pub fn new(mut document: Document, config: &Config) -> Result<Self, TabviewError> {
        let tabs = TabState::from_document(&mut document)?;

        Ok(Self {
            document,
            tabs,
            search: SearchState::new(config.search.no_results_dismiss()),
            focus: Focus::TabBar,
            panel_scroll: ScrollState::new(),
            notification: NotificationState::new(),
            layout_regions: LayoutRegions::new(),
            show_tab_numbers: config.tabs.show_numbers,
            should_quit: false,
        })
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn active_panel(&self) -> Option<NodeId> {
        self.tabs.active_panel(&self.document)
    }

    /// Runs timed work that is due at `now`
    pub fn tick(&mut self, now: Instant) {
        self.search.poll_expiry(&mut self.document, now);
    }
}
