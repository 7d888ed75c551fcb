use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use std::io;
use std::time::{Duration, Instant};

use super::app_state::{App, Focus};
use super::mouse_events;
use crate::search::search_events;
use crate::tabs::tab_events;

mod global;

/// Timeout for event polling - lets banner and notification expiry show up
/// without user input
const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

impl App {
    /// Handle at most one terminal event, then return so the caller can redraw
    pub fn handle_events(&mut self) -> io::Result<()> {
        self.tick(Instant::now());

        if event::poll(EVENT_POLL_TIMEOUT)? {
            match event::read()? {
                // Check that it's a key press event to avoid duplicates
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event);
                }
                Event::Paste(text) => {
                    self.handle_paste_event(&text);
                }
                Event::Mouse(mouse_event) => {
                    mouse_events::handle_mouse_event(self, mouse_event);
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Pasted text always lands in the search field
    pub fn handle_paste_event(&mut self, text: &str) {
        search_events::open_search(self);
        search_events::handle_search_paste(self, text);
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if global::handle_global_keys(self, key) {
            return;
        }

        if search_events::handle_search_key(self, key) {
            return;
        }

        if self.focus == Focus::TabBar {
            self.handle_tab_bar_key(key);
        }
    }

    /// Keys while a tab button has focus
    ///
    /// Tab navigation gets the first look; anything it does not consume falls
    /// through to panel scrolling and the remaining shortcuts.
    fn handle_tab_bar_key(&mut self, key: KeyEvent) {
        if tab_events::handle_tab_key(self, key) {
            return;
        }

        match key.code {
            KeyCode::Char('/') => search_events::open_search(self),
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => self.panel_scroll.scroll_up(1),
            KeyCode::Down | KeyCode::Char('j') => self.panel_scroll.scroll_down(1),
            KeyCode::PageUp => self.panel_scroll.page_up(),
            KeyCode::PageDown => self.panel_scroll.page_down(),
            KeyCode::Home | KeyCode::Char('g') => self.panel_scroll.jump_to_top(),
            KeyCode::End | KeyCode::Char('G') => self.panel_scroll.jump_to_bottom(),
            _ => {}
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
