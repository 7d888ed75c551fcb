//! Notification rendering

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use std::time::Instant;

use super::notification_state::NotificationState;

/// Render the notification overlay in the top-right corner of the frame
///
/// Call after everything else so the notification sits on top.
pub fn render_notification(frame: &mut Frame, notification: &mut NotificationState) {
    notification.clear_if_expired(Instant::now());

    let Some(notif) = notification.current() else {
        return;
    };

    // 1 space padding each side plus borders
    let content_width =
        u16::try_from(Span::raw(notif.message.as_str()).width()).unwrap_or(u16::MAX);
    let notification_height = 3;

    let frame_area = frame.area();
    let margin = 2;
    let notification_width = content_width
        .saturating_add(4)
        .min(frame_area.width.saturating_sub(margin * 2));
    let notification_area = Rect {
        x: frame_area
            .width
            .saturating_sub(notification_width.saturating_add(margin)),
        y: margin,
        width: notification_width,
        height: notification_height.min(frame_area.height.saturating_sub(margin * 2)),
    };

    if notification_area.width < 5 || notification_area.height < 3 {
        return;
    }

    frame.render_widget(Clear, notification_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(notif.bg).bg(notif.bg))
        .style(Style::default().bg(notif.bg));

    let text = Line::from(Span::styled(
        format!(" {} ", notif.message),
        Style::default().fg(notif.fg).bg(notif.bg),
    ));

    frame.render_widget(Paragraph::new(text).block(block), notification_area);
}
