//! Shared test utilities for tabview
//!
//! This module provides common test fixtures and helper functions
//! used across multiple test modules.

#[cfg(test)]
pub mod test_helpers {
    use crate::app::App;
    use crate::config::Config;
    use crate::document::{Document, parse_html};
    use crate::tabs::TabState;
    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    /// Three tabs; the second panel holds the worked search example and the
    /// third mixes header cells with body cells.
    pub const SAMPLE_HTML: &str = r#"<!DOCTYPE html>
<html>
<body>
  <div class="tabs">
    <button class="tab-button">Overview</button>
    <button class="tab-button">Details</button>
    <button class="tab-button">Table</button>
  </div>
  <div class="tab-panel">
    <h2>Overview</h2>
    <p>Welcome to the <strong>overview</strong> page.</p>
  </div>
  <div class="tab-panel">
    <p>Hello world, hello again.</p>
  </div>
  <div class="tab-panel">
    <table>
      <tr><th>Hello header</th><th>Price</th></tr>
      <tr><td>hello cell</td><td>12</td></tr>
    </table>
  </div>
</body>
</html>"#;

    /// Parsed sample document with its tab state (first tab active)
    pub fn sample_document() -> (Document, TabState) {
        let mut doc = parse_html(SAMPLE_HTML);
        let tabs = TabState::from_document(&mut doc).unwrap();
        (doc, tabs)
    }

    /// Helper to create App over the sample document with default config
    pub fn test_app() -> App {
        App::new(parse_html(SAMPLE_HTML), &Config::default()).unwrap()
    }

    /// Helper to create a KeyEvent without modifiers
    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    /// Helper to create a KeyEvent with specific modifiers
    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    /// Types each character of `text` as a separate key press
    pub fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key_event(key(KeyCode::Char(c)));
        }
    }
}
