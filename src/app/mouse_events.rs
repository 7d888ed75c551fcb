//! Mouse event dispatcher
//!
//! Routes mouse events to appropriate handlers based on position.

use ratatui::crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use super::app_state::{App, Focus};
use crate::layout::{Region, region_at};
use crate::search::search_events;
use crate::tabs::tab_events;

/// Lines moved per wheel notch
const WHEEL_LINES: u16 = 3;

pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    let region = region_at(&app.layout_regions, mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => match region {
            Some(Region::Tab(index)) => {
                app.focus = Focus::TabBar;
                tab_events::handle_activation_request(app, index);
            }
            Some(Region::SearchBar) => search_events::open_search(app),
            Some(Region::Panel) => app.focus = Focus::TabBar,
            None => {}
        },
        MouseEventKind::ScrollDown if region == Some(Region::Panel) => {
            app.panel_scroll.scroll_down(WHEEL_LINES);
        }
        MouseEventKind::ScrollUp if region == Some(Region::Panel) => {
            app.panel_scroll.scroll_up(WHEEL_LINES);
        }
        _ => {}
    }
}
