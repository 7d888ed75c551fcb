use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::app_state::App;
use crate::search::search_events;

/// Shortcuts that work regardless of focus
pub fn handle_global_keys(app: &mut App, key: KeyEvent) -> bool {
    if !key.modifiers.contains(KeyModifiers::CONTROL) {
        return false;
    }

    match key.code {
        KeyCode::Char('c') => {
            app.should_quit = true;
            true
        }
        KeyCode::Char('k') | KeyCode::Char('f') => {
            search_events::open_search(app);
            true
        }
        _ => false,
    }
}
