use std::{thread, time::Duration};

use crossterm::event::{self, poll, Event, KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use tokio::sync::mpsc::Sender;

use crate::{app::CurrentView, notification::queue::Ticket};

#[derive(Debug)]
pub enum AppEvent {
    Input(KeyEvent),
    Click(u16, u16),
    Quit,
    Startup,
    Resize,
    NotificationExpired(Ticket),
    ExecCommand(String),
    ChangeView(CurrentView),
    ToggleView,
    Dismiss,
}

pub type EventSender = Sender<AppEvent>;

pub fn start(event_sender: EventSender) {
    thread::spawn(move || {
        if event_sender.blocking_send(AppEvent::Startup).is_err() {
            return;
        }
        loop {
            match poll(Duration::from_millis(1000)) {
                Ok(true) => (),
                Ok(false) => continue,
                Err(err) => {
                    log::error!("could not poll terminal events: {}", err);
                    return;
                }
            }
            let action = match event::read() {
                // handle global keys
                Ok(Event::Key(key)) => match key.modifiers {
                    KeyModifiers::CONTROL => match key.code {
                        KeyCode::Char('c') => Some(AppEvent::Quit),
                        _ => Some(AppEvent::Input(key)),
                    },
                    _ => Some(AppEvent::Input(key)),
                },
                Ok(Event::Mouse(mouse)) => click(mouse),
                Ok(Event::Resize(_, _)) => Some(AppEvent::Resize),
                Ok(_) => None,
                Err(err) => {
                    log::error!("could not read terminal event: {}", err);
                    None
                }
            };

            if let Some(action) = action {
                // receiver gone, the application is shutting down
                if event_sender.blocking_send(action).is_err() {
                    return;
                }
            }
        }
    });
}

fn click(mouse: MouseEvent) -> Option<AppEvent> {
    match mouse.kind {
        event::MouseEventKind::Down(event::MouseButton::Left) => {
            Some(AppEvent::Click(mouse.column, mouse.row))
        }
        _ => None,
    }
}
