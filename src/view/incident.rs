use super::View;
use crate::app::{App, CurrentView};
use crate::event::input::AppEvent;
use crate::incident::explanation;
use crossterm::event::KeyCode;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

pub struct IncidentView {}

impl View for IncidentView {
    fn handle(_app: &App, event: &AppEvent) -> Option<AppEvent> {
        if let AppEvent::Input(e) = event {
            return match e.code {
                KeyCode::Char('x') | KeyCode::Enter => Some(AppEvent::Dismiss),
                KeyCode::Char('i') | KeyCode::Esc => Some(AppEvent::ChangeView(CurrentView::Emails)),
                KeyCode::Char('?') => Some(AppEvent::ChangeView(CurrentView::Help)),
                _ => None,
            };
        }
        None
    }

    fn draw(app: &App, frame: &mut Frame, area: Rect) {
        let scheme = app.theme();
        let Some(incident) = &app.incident else {
            frame.render_widget(
                Paragraph::new("No incident loaded, use :load <file>")
                    .style(scheme.panel_empty)
                    .block(Block::default().borders(Borders::ALL).border_style(scheme.panel_border)),
                area,
            );
            return;
        };

        let listed = incident.shapes.len().clamp(1, 8) as u16;
        let [shapes_area, explanation_area] =
            Layout::vertical([Constraint::Length(listed + 2), Constraint::Min(3)]).areas(area);

        let shapes: Vec<Line> = match incident.shapes.is_empty() {
            true => vec![Line::styled("No drawn shapes", scheme.panel_empty)],
            false => incident
                .shapes
                .iter()
                .map(|shape| Line::styled(shape.to_string(), scheme.panel_text))
                .collect(),
        };
        frame.render_widget(
            Paragraph::new(shapes).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(scheme.panel_border)
                    .title(" Drawn shapes "),
            ),
            shapes_area,
        );

        frame.render_widget(
            Paragraph::new(explanation::to_lines(incident.explanation.as_deref()))
                .style(scheme.panel_text)
                .wrap(Wrap { trim: false })
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(scheme.panel_border)
                        .title(" Explanation "),
                ),
            explanation_area,
        );
    }
}
