use super::View;
use crate::app::{App, CurrentView};
use crate::event::input::AppEvent;
use crate::incident::view_mode::ViewMode;
use crossterm::event::KeyCode;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub struct EmailsView {}

impl View for EmailsView {
    fn handle(_app: &App, event: &AppEvent) -> Option<AppEvent> {
        if let AppEvent::Input(e) = event {
            return match e.code {
                KeyCode::Char('x') | KeyCode::Enter => Some(AppEvent::Dismiss),
                KeyCode::Char('v') => Some(AppEvent::ToggleView),
                KeyCode::Char('i') => Some(AppEvent::ChangeView(CurrentView::Incident)),
                KeyCode::Char('?') => Some(AppEvent::ChangeView(CurrentView::Help)),
                _ => None,
            };
        }
        None
    }

    fn draw(app: &App, frame: &mut Frame, area: Rect) {
        let scheme = app.theme();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(scheme.panel_border)
            .title(format!(" Saved e-mails ({}) ", app.config.user));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let emails = app.emails.list(&app.store);
        if emails.is_empty() {
            frame.render_widget(
                Paragraph::new("No saved e-mail").style(scheme.panel_empty),
                inner,
            );
            return;
        }

        match app.view_mode {
            ViewMode::List => {
                let lines: Vec<Line> = emails.into_iter().map(Line::from).collect();
                frame.render_widget(Paragraph::new(lines).style(scheme.panel_text), inner);
            }
            ViewMode::Card => {
                let cards = Layout::vertical(emails.iter().map(|_| Constraint::Length(3)))
                    .split(inner);
                for (email, card) in emails.iter().zip(cards.iter()) {
                    frame.render_widget(
                        Paragraph::new(email.as_str())
                            .style(scheme.panel_text)
                            .block(
                                Block::default()
                                    .borders(Borders::ALL)
                                    .border_style(scheme.panel_border),
                            ),
                        *card,
                    );
                }
            }
        }
    }
}
