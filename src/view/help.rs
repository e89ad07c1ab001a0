use super::View;
use crate::app::{App, CurrentView};
use crate::event::input::AppEvent;
use ratatui::layout::Rect;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

pub struct HelpView {}

impl View for HelpView {
    fn handle(_app: &App, event: &AppEvent) -> Option<AppEvent> {
        match event {
            AppEvent::Input(_) => Some(AppEvent::ChangeView(CurrentView::Emails)),
            _ => None,
        }
    }

    fn draw(_app: &App, frame: &mut Frame, area: Rect) {
        frame.render_widget(Paragraph::new(help()), area);
    }
}

fn help() -> String {
"
Help for you - press any key to return.

Key mappings:

[:]       enter a command
[x]       dismiss the visible notification (or click it)
[enter]   dismiss the visible notification
[v]       toggle list / card view
[i]       switch between e-mails and the loaded incident
[t]       rotate the theme
[?]       this help
[q]       quit

Commands:

success <message>     queue a success notification
error <message>       queue an error notification
warning <message>     queue a warning notification
info <message>        queue an info notification
notify <kind> <msg>   queue a notification by kind name
save <email>          save an e-mail address
delete <email>        forget a saved e-mail address
load <path>           load an exported incident record
view                  toggle list / card view
dismiss               dismiss the visible notification
q                     quit
".to_string()
}
