//! Hit testing for layout regions

use ratatui::layout::{Position, Rect};

use super::layout_regions::{LayoutRegions, Region};

fn contains(rect: &Rect, x: u16, y: u16) -> bool {
    rect.contains(Position { x, y })
}

/// Returns the region containing the given point
///
/// Regions never overlap, so the first hit wins. Returns `None` outside all
/// tracked regions, including the gaps between tab labels.
pub fn region_at(regions: &LayoutRegions, x: u16, y: u16) -> Option<Region> {
    if let Some(index) = regions.tabs.iter().position(|rect| contains(rect, x, y)) {
        return Some(Region::Tab(index));
    }

    if let Some(rect) = &regions.panel
        && contains(rect, x, y)
    {
        return Some(Region::Panel);
    }

    if let Some(rect) = &regions.search_bar
        && contains(rect, x, y)
    {
        return Some(Region::SearchBar);
    }

    None
}
