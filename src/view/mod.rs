pub mod emails;
pub mod help;
pub mod incident;
pub mod layout;
pub mod toast;

use crate::app::App;
use crate::event::input::AppEvent;
use ratatui::layout::Rect;
use ratatui::Frame;

pub trait View {
    fn handle(app: &App, event: &AppEvent) -> Option<AppEvent>;
    fn draw(app: &App, frame: &mut Frame, area: Rect);
}
