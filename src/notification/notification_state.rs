//! Notification state management

use ratatui::style::Color;
use std::time::{Duration, Instant};

/// How long a warning stays on screen
const WARNING_DURATION: Duration = Duration::from_secs(10);

/// A single warning with its display window
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub fg: Color,
    pub bg: Color,
    pub created_at: Instant,
    pub duration: Duration,
}

impl Notification {
    pub fn warning(message: &str) -> Self {
        Self {
            message: message.to_string(),
            fg: Color::Black,
            bg: Color::Yellow,
            created_at: Instant::now(),
            duration: WARNING_DURATION,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) > self.duration
    }
}

/// Holds the notification currently on screen, if any
#[derive(Debug, Default)]
pub struct NotificationState {
    pub current: Option<Notification>,
}

impl NotificationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a warning, replacing whatever was shown before
    pub fn show_warning(&mut self, message: &str) {
        self.current = Some(Notification::warning(message));
    }

    /// Clear expired notification, returns true if cleared
    pub fn clear_if_expired(&mut self, now: Instant) -> bool {
        if let Some(ref notif) = self.current
            && notif.is_expired(now)
        {
            self.current = None;
            return true;
        }
        false
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }
}
