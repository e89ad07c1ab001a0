use super::emails::EmailsView;
use super::help::HelpView;
use super::incident::IncidentView;
use super::View;
use crate::app::App;
use crate::app::CurrentView;
use crate::app::InputMode;
use crate::event::input::AppEvent;
use ratatui::layout::Constraint;
use ratatui::layout::Layout;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

pub struct LayoutView {}

impl View for LayoutView {
    fn handle(_app: &App, _event: &AppEvent) -> Option<AppEvent> {
        None
    }

    fn draw(app: &App, f: &mut Frame, area: Rect) {
        let constraints = vec![
            Constraint::Length(1),
            Constraint::Min(4),
            Constraint::Length(1),
        ];

        let rows = Layout::default()
            .margin(0)
            .constraints(constraints)
            .split(area);

        f.render_widget(status_widget(app), rows[0]);

        match app.view_current {
            CurrentView::Emails => EmailsView::draw(app, f, rows[1]),
            CurrentView::Incident => IncidentView::draw(app, f, rows[1]),
            CurrentView::Help => HelpView::draw(app, f, rows[1]),
        }

        if app.input_mode == InputMode::Command {
            let prompt = format!(":{}", app.command_input.value());
            f.render_widget(
                Paragraph::new(prompt).style(app.theme().widget_command),
                rows[2],
            );
            f.set_cursor_position((
                rows[2].x + 1 + app.command_input.visual_cursor() as u16,
                rows[2].y,
            ));
        }
    }
}

fn status_widget(app: &App) -> Paragraph<'_> {
    let scheme = app.theme();
    let queued = app.notifications.pending();
    Paragraph::new(vec![Line::from(vec![
        Span::styled(
            format!(" {} view ", app.view_mode),
            scheme.widget_active.add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {} queued ", queued),
            match queued {
                0 => scheme.widget_active,
                _ => scheme.widget_inactive,
            },
        ),
        Span::raw(" [?] help [i] incident [:] command [q] quit"),
    ])])
}
