//! Tab event handling
//!
//! User-facing entry points into the tab state: activation requests (mouse
//! click or number key) and left/right navigation on the tab bar.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Instant;

#[cfg(debug_assertions)]
use log::debug;

use super::tab_state::Direction;
use crate::app::{App, Focus};
use crate::search::search_events;

/// Handle a key while the tab bar has focus
/// Returns true if event was consumed, false otherwise
pub fn handle_tab_key(app: &mut App, key: KeyEvent) -> bool {
    if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return false;
    }

    match key.code {
        KeyCode::Left => {
            handle_directional_key(app, Direction::Previous);
            true
        }
        KeyCode::Right => {
            handle_directional_key(app, Direction::Next);
            true
        }
        KeyCode::Char(c) => match c.to_digit(10) {
            Some(digit) if digit >= 1 && (digit as usize) <= app.tabs.tab_count() => {
                handle_activation_request(app, digit as usize - 1);
                true
            }
            _ => false,
        },
        _ => false,
    }
}

/// Activate a tab on explicit request and drop the running search
///
/// Switching to other content invalidates the query, so highlights, banner
/// and the search field are all cleared.
pub fn handle_activation_request(app: &mut App, index: usize) {
    #[cfg(debug_assertions)]
    debug!("Tabs: activation request for {}", index + 1);

    app.tabs.activate(&mut app.document, index);
    search_events::reset_search(app);
    app.panel_scroll.jump_to_top();
}

/// Move to the neighbouring tab, wrapping around, and keep focus on the tab bar
///
/// Unlike an activation request the query is kept and searched again in the
/// newly active panel.
pub fn handle_directional_key(app: &mut App, direction: Direction) {
    let index = app.tabs.neighbor(direction);

    #[cfg(debug_assertions)]
    debug!("Tabs: {:?} -> {}", direction, index + 1);

    app.tabs.activate(&mut app.document, index);
    // The query survives; its highlights move to the new panel
    app.search
        .refresh(&mut app.document, &app.tabs, Instant::now());
    app.focus = Focus::TabBar;
    app.panel_scroll.jump_to_top();
}
