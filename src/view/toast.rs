//! The visible slot: a fixed overlay in one corner of the screen holding at
//! most one notification.

use crate::app::App;
use crate::notification::{Notification, Position};
use ratatui::layout::Rect;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

const MAX_WIDTH: u16 = 40;
const MARGIN: u16 = 1;

pub struct ToastView {}

impl ToastView {
    pub fn draw(app: &App, notification: &Notification, frame: &mut Frame, area: Rect) {
        let style = app.theme().notification(notification.kind);
        frame.render_widget(Clear, area);
        frame.render_widget(
            Paragraph::new(notification.message.as_str())
                .style(style)
                .wrap(Wrap { trim: false })
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(style)
                        .title(format!(" {} ", notification.kind)),
                ),
            area,
        );
    }
}

/// Rectangle the notification occupies within `screen`.
pub fn area(notification: &Notification, screen: Rect) -> Rect {
    let width = screen.width.saturating_sub(MARGIN * 2).min(MAX_WIDTH);
    let inner_width = width.saturating_sub(2).max(1) as usize;
    let lines: usize = notification
        .message
        .lines()
        .map(|line| line.chars().count().max(1).div_ceil(inner_width))
        .sum::<usize>()
        .max(1);
    let height = (lines as u16)
        .saturating_add(2)
        .min(screen.height.saturating_sub(MARGIN * 2));

    let left = screen.x + MARGIN;
    let right = (screen.x + screen.width).saturating_sub(MARGIN + width);
    let top = screen.y + MARGIN;
    let bottom = (screen.y + screen.height).saturating_sub(MARGIN + height);

    let (x, y) = match notification.position {
        Position::BottomLeft => (left, bottom),
        Position::BottomRight => (right, bottom),
        Position::TopLeft => (left, top),
        Position::TopRight => (right, top),
    };
    Rect::new(x, y, width, height)
}
