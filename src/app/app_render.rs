use ratatui::{
    Frame,
    layout::{Constraint, Layout},
};

use super::app_state::App;
use crate::notification::render_notification;
use crate::search::search_render::{self, SEARCH_BAR_HEIGHT};
use crate::tabs::tab_render::{self, TAB_BAR_HEIGHT};

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        self.layout_regions.clear();

        let layout = Layout::vertical([
            Constraint::Length(TAB_BAR_HEIGHT),
            Constraint::Min(3),
            Constraint::Length(SEARCH_BAR_HEIGHT),
            Constraint::Length(1),
        ])
        .split(frame.area());
        let (tab_area, panel_area, search_area, help_area) =
            (layout[0], layout[1], layout[2], layout[3]);

        self.layout_regions.tabs = tab_render::render_bar(self, frame, tab_area);

        let panel_rect = crate::panel::render_panel(self, frame, panel_area);
        self.layout_regions.panel = Some(panel_rect);

        let search_rect = search_render::render_bar(self, frame, search_area);
        self.layout_regions.search_bar = Some(search_rect);

        crate::help::help_line_render::render_line(self, frame, help_area);

        render_notification(frame, &mut self.notification);
    }
}
