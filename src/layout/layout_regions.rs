//! Layout regions tracking for UI components

use ratatui::layout::Rect;

/// Identifies a UI component region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// Label of the tab at this position
    Tab(usize),
    Panel,
    SearchBar,
}

/// Tracks rendered areas of UI components
///
/// Rebuilt on every render pass.
#[derive(Default, Clone, Debug)]
pub struct LayoutRegions {
    /// One rect per tab label, in tab order
    pub tabs: Vec<Rect>,
    pub panel: Option<Rect>,
    pub search_bar: Option<Rect>,
}

impl LayoutRegions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all regions before a new render pass
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
