//! Search event handling
//!
//! Handles keyboard events for the search field:
//! - Focusing and leaving the field
//! - Text input, which re-runs the search on every change
//! - Pasted text

use ratatui::crossterm::event::{KeyCode, KeyEvent};
use std::time::Instant;

#[cfg(debug_assertions)]
use log::debug;

use crate::app::{App, Focus};

/// Handle key events while the search field has focus
/// Returns true if event was consumed, false otherwise
pub fn handle_search_key(app: &mut App, key: KeyEvent) -> bool {
    if app.focus != Focus::Search {
        return false;
    }

    match key.code {
        // Leave the field; query and highlights stay
        KeyCode::Esc | KeyCode::Enter | KeyCode::Tab | KeyCode::BackTab => {
            #[cfg(debug_assertions)]
            debug!("Search: left field (query '{}')", app.search.query());

            app.focus = Focus::TabBar;
            true
        }

        _ => {
            app.search.search_textarea_mut().input(key);
            run_search(app);
            true
        }
    }
}

/// Insert pasted text into the search field as a single line
pub fn handle_search_paste(app: &mut App, text: &str) {
    let single_line: String = text.chars().filter(|c| *c != '\n' && *c != '\r').collect();
    app.search.search_textarea_mut().insert_str(&single_line);
    run_search(app);
}

/// Move focus into the search field
pub fn open_search(app: &mut App) {
    #[cfg(debug_assertions)]
    debug!("Search: focused");

    app.focus = Focus::Search;
}

/// Remove highlights and banner and empty the search field
pub fn reset_search(app: &mut App) {
    #[cfg(debug_assertions)]
    debug!("Search: reset (query was '{}')", app.search.query());

    app.search.reset(&mut app.document);
}

fn run_search(app: &mut App) {
    if app
        .search
        .update_from_input(&mut app.document, &app.tabs, Instant::now())
    {
        // Banner is inserted at the top of the panel
        app.panel_scroll.jump_to_top();
    }
}

#[cfg(test)]
#[path = "search_events_tests.rs"]
mod search_events_tests;
