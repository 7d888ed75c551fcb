use crate::document::{Document, NodeId};
use crate::error::TabviewError;

/// Class marking tab buttons
pub const TAB_CLASS: &str = "tab-button";
/// Class marking tab panels
pub const PANEL_CLASS: &str = "tab-panel";
/// Class set on the active tab and the visible panel
pub const ACTIVE_CLASS: &str = "active";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// Positional pairing of tab buttons and panels plus the active index
#[derive(Debug, Clone)]
pub struct TabState {
    tabs: Vec<NodeId>,
    panels: Vec<NodeId>,
    active_index: usize,
}

impl TabState {
    /// Finds tabs and panels in document order and activates the first pair
    pub fn from_document(doc: &mut Document) -> Result<Self, TabviewError> {
        let tabs = doc.find_by_class(doc.root(), TAB_CLASS);
        let panels = doc.find_by_class(doc.root(), PANEL_CLASS);

        if tabs.is_empty() {
            return Err(TabviewError::NoTabs);
        }
        if tabs.len() != panels.len() {
            return Err(TabviewError::TabPanelMismatch {
                tabs: tabs.len(),
                panels: panels.len(),
            });
        }

        #[cfg(debug_assertions)]
        log::debug!("Tabs: found {} tab/panel pairs", tabs.len());

        let mut state = Self {
            tabs,
            panels,
            active_index: 0,
        };
        state.activate(doc, 0);
        Ok(state)
    }

    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn tabs(&self) -> &[NodeId] {
        &self.tabs
    }

    pub fn panels(&self) -> &[NodeId] {
        &self.panels
    }

    /// The panel currently marked active in the document, if any
    pub fn active_panel(&self, doc: &Document) -> Option<NodeId> {
        self.panels
            .iter()
            .copied()
            .find(|&panel| doc.has_class(panel, ACTIVE_CLASS))
    }

    /// Makes `index` the single active pair
    ///
    /// Only the active tab keeps `tabindex="0"`, so sequential keyboard
    /// navigation reaches it and skips the others. Re-activating the current
    /// index leaves the document unchanged.
    pub fn activate(&mut self, doc: &mut Document, index: usize) {
        debug_assert!(
            index < self.tabs.len(),
            "tab index {} out of range for {} tabs",
            index,
            self.tabs.len()
        );
        if index >= self.tabs.len() {
            return;
        }

        for (position, &tab) in self.tabs.iter().enumerate() {
            let is_active = position == index;
            doc.toggle_class(tab, ACTIVE_CLASS, is_active);
            doc.set_attr(tab, "aria-selected", if is_active { "true" } else { "false" });
            doc.set_attr(tab, "tabindex", if is_active { "0" } else { "-1" });
        }

        for (position, &panel) in self.panels.iter().enumerate() {
            doc.toggle_class(panel, ACTIVE_CLASS, position == index);
        }

        self.active_index = index;

        #[cfg(debug_assertions)]
        log::debug!("Tabs: activated {}/{}", index + 1, self.tabs.len());
    }

    /// Index reached from the active one in `direction`, wrapping at both ends
    pub fn neighbor(&self, direction: Direction) -> usize {
        let count = self.tabs.len();
        match direction {
            Direction::Previous => (self.active_index + count - 1) % count,
            Direction::Next => (self.active_index + 1) % count,
        }
    }

    /// Text of every tab button with whitespace collapsed
    pub fn labels(&self, doc: &Document) -> Vec<String> {
        self.tabs
            .iter()
            .map(|&tab| {
                doc.text_content(tab)
                    .split_whitespace()
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect()
    }
}
