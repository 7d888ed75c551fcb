//! Notification module for tabview
//!
//! Transient messages drawn over the top-right corner, used for problems that
//! should not stop the program (such as an unreadable config file).

mod notification_render;
mod notification_state;

pub use notification_render::render_notification;
pub use notification_state::{Notification, NotificationState};
