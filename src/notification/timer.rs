use std::time::Duration;

use tokio::{sync::mpsc::Sender, task, task::JoinHandle, time};

use super::queue::{DismissTimer, Ticket};
use crate::event::input::AppEvent;

/// Posts [AppEvent::NotificationExpired] back to the application loop once
/// the delay has elapsed.
pub struct TokioTimer {
    sender: Sender<AppEvent>,
    pending: Option<(Ticket, JoinHandle<()>)>,
}

impl TokioTimer {
    pub fn new(sender: Sender<AppEvent>) -> Self {
        Self {
            sender,
            pending: None,
        }
    }
}

impl DismissTimer for TokioTimer {
    fn arm(&mut self, ticket: Ticket, after: Duration) {
        let sender = self.sender.clone();
        let handle = task::spawn(async move {
            time::sleep(after).await;
            if let Err(err) = sender.send(AppEvent::NotificationExpired(ticket)).await {
                log::debug!("could not deliver timer {:?}: {}", ticket, err);
            }
        });

        // the queue only ever has one timer armed
        if let Some((_, previous)) = self.pending.replace((ticket, handle)) {
            previous.abort();
        }
    }

    fn cancel(&mut self, ticket: Ticket) {
        match self.pending.take() {
            Some((armed, handle)) if armed == ticket => handle.abort(),
            other => self.pending = other,
        }
    }
}

impl Drop for TokioTimer {
    fn drop(&mut self) {
        if let Some((_, handle)) = self.pending.take() {
            handle.abort();
        }
    }
}
