pub mod command;

use std::{fmt::Display, io};

use command::Command;
use crossterm::event::{Event, KeyCode, KeyEvent};
use ratatui::{layout::Rect, prelude::CrosstermBackend, Terminal};
use tokio::sync::mpsc::{Receiver, Sender};
use tui_input::{backend::crossterm::EventHandler, Input};

use crate::{
    config::Config,
    event::input::AppEvent,
    incident::{
        email::{EmailBookmarks, SaveOutcome},
        shape::ShapeError,
        view_mode::ViewMode,
        Incident,
    },
    notification::{
        queue::NotificationQueue, timer::TokioTimer, NotificationKind, NotificationOptions,
    },
    store::LocalStore,
    theme::{Scheme, Theme},
    ui::render,
    view::{emails::EmailsView, help::HelpView, incident::IncidentView, View},
};

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum InputMode {
    Normal,
    Command,
}

impl Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum CurrentView {
    Emails,
    Incident,
    Help,
}

pub struct App {
    pub config: Config,
    pub notifications: NotificationQueue<TokioTimer>,
    pub store: LocalStore,
    pub emails: EmailBookmarks,
    pub view_mode: ViewMode,
    pub incident: Option<Incident>,
    pub view_current: CurrentView,
    pub input_mode: InputMode,
    pub command_input: Input,
    pub theme: Theme,
    /// Where the visible notification was last drawn, for click dismissal.
    pub toast_area: Option<Rect>,
    receiver: Receiver<AppEvent>,
    sender: Sender<AppEvent>,
    quit: bool,
}

impl App {
    pub fn new(
        config: Config,
        store: LocalStore,
        receiver: Receiver<AppEvent>,
        sender: Sender<AppEvent>,
    ) -> App {
        App {
            notifications: NotificationQueue::new(config.queue(), TokioTimer::new(sender.clone())),
            emails: EmailBookmarks::new(&config.user),
            view_mode: ViewMode::load(&store),
            incident: None,
            view_current: CurrentView::Emails,
            input_mode: InputMode::Normal,
            command_input: Input::default(),
            theme: Theme::default(),
            toast_area: None,
            config,
            store,
            receiver,
            sender,
            quit: false,
        }
    }

    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> Result<(), anyhow::Error> {
        loop {
            let Some(event) = self.receiver.recv().await else {
                return Ok(());
            };

            self.handle_event(event).await?;

            if self.quit {
                return Ok(());
            }

            terminal.autoresize()?;
            terminal.draw(|frame| {
                render(self, frame);
            })?;
        }
    }

    pub fn theme(&self) -> Scheme {
        self.theme.scheme()
    }

    async fn handle_event(&mut self, event: AppEvent) -> Result<(), anyhow::Error> {
        match event {
            AppEvent::Quit => self.quit = true,
            AppEvent::Startup | AppEvent::Resize => (),
            AppEvent::NotificationExpired(ticket) => self.notifications.expire(ticket),
            AppEvent::Click(column, row) => {
                if let Some(area) = self.toast_area {
                    if area.contains((column, row).into()) {
                        self.notifications.dismiss();
                    }
                }
            }
            AppEvent::Dismiss => {
                self.notifications.dismiss();
            }
            AppEvent::ToggleView => self.toggle_view(),
            AppEvent::ChangeView(view) => self.view_current = view,
            AppEvent::ExecCommand(line) => self.exec(&line),
            AppEvent::Input(key) => self.handle_key(key).await?,
        }
        Ok(())
    }

    async fn handle_key(&mut self, key: KeyEvent) -> Result<(), anyhow::Error> {
        match self.input_mode {
            InputMode::Command => match key.code {
                // escape back to normal mode
                KeyCode::Esc => {
                    self.input_mode = InputMode::Normal;
                    self.command_input.reset();
                }
                KeyCode::Enter => {
                    self.input_mode = InputMode::Normal;
                    let line = self.command_input.value().to_string();
                    self.command_input.reset();
                    self.sender.send(AppEvent::ExecCommand(line)).await?;
                }
                // delegate keys to command input
                _ => {
                    self.command_input.handle_event(&Event::Key(key));
                }
            },
            InputMode::Normal => {
                match key.code {
                    KeyCode::Char(':') => {
                        self.input_mode = InputMode::Command;
                        return Ok(());
                    }
                    KeyCode::Char('t') => {
                        self.theme = self.theme.next();
                        return Ok(());
                    }
                    KeyCode::Char('q') => {
                        self.quit = true;
                        return Ok(());
                    }
                    _ => (),
                }

                // let the current view decide what the key means
                let event = AppEvent::Input(key);
                let next = match self.view_current {
                    CurrentView::Emails => EmailsView::handle(self, &event),
                    CurrentView::Incident => IncidentView::handle(self, &event),
                    CurrentView::Help => HelpView::handle(self, &event),
                };
                if let Some(next) = next {
                    self.sender.send(next).await?;
                }
            }
        }
        Ok(())
    }

    fn exec(&mut self, line: &str) {
        let command = match command::parse(line) {
            Ok(Some(command)) => command,
            Ok(None) => return,
            Err(err) => {
                self.notifications.error(err.to_string(), NotificationOptions::default());
                return;
            }
        };

        match command {
            Command::Notify(kind, message) => self.notify(kind, message),
            Command::NotifyNamed(kind, message) => {
                // rejected kinds are logged by the queue and never shown
                let _ = self
                    .notifications
                    .enqueue(&kind, message, NotificationOptions::default());
            }
            Command::SaveEmail(email) => self.save_email(&email),
            Command::DeleteEmail(email) => self.delete_email(&email),
            Command::LoadIncident(path) => self.load_incident(&path),
            Command::ToggleView => self.toggle_view(),
            Command::Dismiss => {
                self.notifications.dismiss();
            }
            Command::Quit => self.quit = true,
        }
    }

    fn notify(&mut self, kind: NotificationKind, message: String) {
        let options = NotificationOptions::default();
        match kind {
            NotificationKind::Success => self.notifications.success(message, options),
            NotificationKind::Error => self.notifications.error(message, options),
            NotificationKind::Warning => self.notifications.warning(message, options),
            NotificationKind::Info => self.notifications.info(message, options),
        }
    }

    fn save_email(&mut self, email: &str) {
        match self.emails.save(&mut self.store, email) {
            Ok(SaveOutcome::Saved) => self.notify(NotificationKind::Success, "Email saved".to_string()),
            Ok(SaveOutcome::AlreadySaved) => self.notify(
                NotificationKind::Warning,
                "This email already exists".to_string(),
            ),
            Ok(SaveOutcome::Empty) => self.notify(
                NotificationKind::Warning,
                "Please enter an email address".to_string(),
            ),
            Err(err) => {
                log::error!("could not save email: {:#}", err);
                self.notify(NotificationKind::Error, format!("Could not save email: {}", err));
            }
        }
    }

    fn delete_email(&mut self, email: &str) {
        match self.emails.delete(&mut self.store, email) {
            Ok(true) => self.notify(NotificationKind::Info, "Email deleted".to_string()),
            Ok(false) => self.notify(
                NotificationKind::Warning,
                format!("{} is not saved", email.trim()),
            ),
            Err(err) => {
                log::error!("could not delete email: {:#}", err);
                self.notify(NotificationKind::Error, format!("Could not delete email: {}", err));
            }
        }
    }

    fn load_incident(&mut self, path: &str) {
        let loaded = match Incident::read(path) {
            Ok(loaded) => loaded,
            Err(err) => {
                log::error!("could not load incident: {:#}", err);
                self.notify(NotificationKind::Error, format!("Could not load incident: {}", err));
                return;
            }
        };

        for problem in &loaded.problems {
            match problem {
                ShapeError::NotAnArray => {
                    self.notify(NotificationKind::Error, format!("Map: {}", problem))
                }
                _ => self.notify(NotificationKind::Warning, format!("Map: skipped {}", problem)),
            }
        }
        self.notify(
            NotificationKind::Info,
            format!("Loaded incident with {} shapes", loaded.incident.shapes.len()),
        );
        self.incident = Some(loaded.incident);
        self.view_current = CurrentView::Incident;
    }

    fn toggle_view(&mut self) {
        match self.view_mode.toggle(&mut self.store) {
            Ok(mode) => {
                self.view_mode = mode;
                self.notify(NotificationKind::Info, format!("Switched to {} view", mode));
            }
            Err(err) => {
                log::error!("could not store view preference: {:#}", err);
                self.notify(
                    NotificationKind::Error,
                    format!("Could not store view preference: {}", err),
                );
            }
        }
    }
}
