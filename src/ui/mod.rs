use ratatui::Frame;

use crate::app::App;
use crate::view::layout::LayoutView;
use crate::view::toast::{self, ToastView};
use crate::view::View;

pub fn render(app: &mut App, frame: &mut Frame) {
    LayoutView::draw(app, frame, frame.area());

    app.toast_area = app
        .notifications
        .visible()
        .map(|notification| toast::area(notification, frame.area()));

    if let (Some(notification), Some(area)) = (app.notifications.visible(), app.toast_area) {
        ToastView::draw(app, notification, frame, area);
    }
}
