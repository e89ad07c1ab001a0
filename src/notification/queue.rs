//! Single-slot notification queue.
//!
//! Requests are shown one at a time in arrival order. Each shown notification
//! arms a dismissal timer; when it fires (or the user dismisses the toast) the
//! next request is promoted. Timer firings carry a [Ticket] and are ignored
//! unless the ticket is the one currently armed, so a firing that races with
//! a cancellation is harmless.

use std::collections::VecDeque;
use std::time::Duration;

use super::{
    InvalidNotificationKind, Notification, NotificationKind, NotificationOptions, Position,
    DEFAULT_DURATION,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ticket(u64);

/// Cancellable delayed task. Whoever implements this must eventually route
/// the firing back to [NotificationQueue::expire].
pub trait DismissTimer {
    fn arm(&mut self, ticket: Ticket, after: Duration);
    fn cancel(&mut self, ticket: Ticket);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueConfig {
    pub default_duration: Duration,
    pub default_position: Position,
    pub exit_delay: Duration,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            default_duration: DEFAULT_DURATION,
            default_position: Position::default(),
            exit_delay: Duration::ZERO,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum SlotState {
    Idle,
    Showing {
        notification: Notification,
        ticket: Ticket,
    },
    /// Previous notification removed, waiting for the exit delay before the
    /// next one may be shown.
    Leaving { ticket: Ticket },
}

pub struct NotificationQueue<T: DismissTimer> {
    config: QueueConfig,
    timer: T,
    queue: VecDeque<Notification>,
    state: SlotState,
    next_ticket: u64,
}

impl<T: DismissTimer> NotificationQueue<T> {
    pub fn new(config: QueueConfig, timer: T) -> Self {
        Self {
            config,
            timer,
            queue: VecDeque::new(),
            state: SlotState::Idle,
            next_ticket: 0,
        }
    }

    /// Queue a notification by kind name. An unknown kind leaves the queue
    /// untouched and is reported on the log only.
    pub fn enqueue(
        &mut self,
        kind: &str,
        message: impl Into<String>,
        options: NotificationOptions,
    ) -> Result<(), InvalidNotificationKind> {
        let kind = match kind.parse::<NotificationKind>() {
            Ok(kind) => kind,
            Err(err) => {
                log::error!("{}", err);
                return Err(err);
            }
        };
        self.notify(kind, message, options);
        Ok(())
    }

    pub fn notify(
        &mut self,
        kind: NotificationKind,
        message: impl Into<String>,
        options: NotificationOptions,
    ) {
        let duration = match options.duration {
            Some(d) if d.is_zero() => {
                log::warn!(
                    "notification duration must be positive, using {}ms",
                    self.config.default_duration.as_millis()
                );
                self.config.default_duration
            }
            Some(d) => d,
            None => self.config.default_duration,
        };

        self.queue.push_back(Notification {
            kind,
            message: message.into(),
            duration,
            position: options.position.unwrap_or(self.config.default_position),
        });
        self.process();
    }

    pub fn success(&mut self, message: impl Into<String>, options: NotificationOptions) {
        self.logged(NotificationKind::Success, message.into(), options)
    }

    pub fn error(&mut self, message: impl Into<String>, options: NotificationOptions) {
        self.logged(NotificationKind::Error, message.into(), options)
    }

    pub fn warning(&mut self, message: impl Into<String>, options: NotificationOptions) {
        self.logged(NotificationKind::Warning, message.into(), options)
    }

    pub fn info(&mut self, message: impl Into<String>, options: NotificationOptions) {
        self.logged(NotificationKind::Info, message.into(), options)
    }

    fn logged(&mut self, kind: NotificationKind, message: String, options: NotificationOptions) {
        log::info!("notification {}: {}", kind, message);
        self.notify(kind, message, options);
    }

    /// Dismiss the visible notification. Returns false if nothing is visible.
    pub fn dismiss(&mut self) -> bool {
        match self.state {
            SlotState::Showing { ticket, .. } => {
                self.timer.cancel(ticket);
                self.leave();
                true
            }
            _ => false,
        }
    }

    /// Deliver a timer firing.
    pub fn expire(&mut self, ticket: Ticket) {
        match self.state {
            SlotState::Showing { ticket: current, .. } if current == ticket => self.leave(),
            SlotState::Leaving { ticket: current } if current == ticket => {
                self.state = SlotState::Idle;
                self.process();
            }
            _ => log::debug!("ignoring stale notification timer {:?}", ticket),
        }
    }

    pub fn visible(&self) -> Option<&Notification> {
        match &self.state {
            SlotState::Showing { notification, .. } => Some(notification),
            _ => None,
        }
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn state(&self) -> &SlotState {
        &self.state
    }

    pub fn is_idle(&self) -> bool {
        self.state == SlotState::Idle
    }

    #[cfg(test)]
    fn timer(&self) -> &T {
        &self.timer
    }

    #[cfg(test)]
    fn timer_mut(&mut self) -> &mut T {
        &mut self.timer
    }

    fn process(&mut self) {
        if self.state != SlotState::Idle {
            return;
        }
        let Some(notification) = self.queue.pop_front() else {
            return;
        };
        let ticket = self.ticket();
        self.timer.arm(ticket, notification.duration);
        self.state = SlotState::Showing {
            notification,
            ticket,
        };
    }

    fn leave(&mut self) {
        if self.config.exit_delay.is_zero() {
            self.state = SlotState::Idle;
            self.process();
            return;
        }
        let ticket = self.ticket();
        self.timer.arm(ticket, self.config.exit_delay);
        self.state = SlotState::Leaving { ticket };
    }

    fn ticket(&mut self) -> Ticket {
        self.next_ticket += 1;
        Ticket(self.next_ticket)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use log::{Level, LevelFilter, Log, Metadata, Record};
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::sync::Once;

    thread_local! {
        static RECORDS: RefCell<Vec<(Level, String)>> = const { RefCell::new(Vec::new()) };
    }

    /// Keeps log records per test thread so parallel tests don't see each other.
    struct CapturingLogger;

    impl Log for CapturingLogger {
        fn enabled(&self, _metadata: &Metadata) -> bool {
            true
        }

        fn log(&self, record: &Record) {
            RECORDS.with(|r| r.borrow_mut().push((record.level(), record.args().to_string())));
        }

        fn flush(&self) {}
    }

    static LOGGER: CapturingLogger = CapturingLogger;
    static INSTALL: Once = Once::new();

    fn capture_logs() {
        INSTALL.call_once(|| {
            let _ = log::set_logger(&LOGGER);
            log::set_max_level(LevelFilter::Trace);
        });
        RECORDS.with(|r| r.borrow_mut().clear());
    }

    fn logged_at(level: Level) -> Vec<String> {
        RECORDS.with(|r| {
            r.borrow()
                .iter()
                .filter(|(l, _)| *l == level)
                .map(|(_, message)| message.clone())
                .collect()
        })
    }

    /// Simulated clock. Armed tasks are kept with their absolute deadline.
    #[derive(Default)]
    struct ManualTimer {
        pub now: Duration,
        pub armed: Vec<(Ticket, Duration)>,
        pub cancelled: Vec<Ticket>,
    }

    impl DismissTimer for ManualTimer {
        fn arm(&mut self, ticket: Ticket, after: Duration) {
            self.armed.push((ticket, self.now + after));
        }

        fn cancel(&mut self, ticket: Ticket) {
            self.armed.retain(|(t, _)| *t != ticket);
            self.cancelled.push(ticket);
        }
    }

    fn ms(ms: u64) -> Duration {
        Duration::from_millis(ms)
    }

    fn queue() -> NotificationQueue<ManualTimer> {
        NotificationQueue::new(QueueConfig::default(), ManualTimer::default())
    }

    fn visible_message(queue: &NotificationQueue<ManualTimer>) -> Option<String> {
        queue.visible().map(|n| n.message.clone())
    }

    /// Fire every task due up to `at`, in deadline order, and return the
    /// messages that became visible along the way.
    fn advance_to(queue: &mut NotificationQueue<ManualTimer>, at: Duration) -> Vec<String> {
        let mut shown = vec![];
        loop {
            let due = queue
                .timer()
                .armed
                .iter()
                .filter(|(_, deadline)| *deadline <= at)
                .min_by_key(|(_, deadline)| *deadline)
                .copied();
            let Some((ticket, deadline)) = due else {
                break;
            };
            let timer = queue.timer_mut();
            timer.now = deadline;
            timer.armed.retain(|(t, _)| *t != ticket);
            queue.expire(ticket);
            if let Some(message) = visible_message(queue) {
                shown.push(message);
            }
        }
        queue.timer_mut().now = at;
        shown
    }

    #[test]
    fn test_empty_queue_is_idle() {
        let mut queue = queue();
        assert!(queue.is_idle());
        assert_eq!(None, queue.visible());
        assert_eq!(0, queue.pending());

        advance_to(&mut queue, ms(10_000));
        assert!(queue.is_idle());
        assert!(queue.timer().armed.is_empty());
    }

    #[test]
    fn test_shows_first_immediately_and_next_after_duration() {
        let mut queue = queue();
        queue.info("A", NotificationOptions::default());
        queue.success("B", NotificationOptions::default());

        assert_eq!(Some("A".to_string()), visible_message(&queue));
        assert_eq!(1, queue.pending());

        advance_to(&mut queue, ms(2999));
        assert_eq!(Some("A".to_string()), visible_message(&queue));

        advance_to(&mut queue, ms(3000));
        assert_eq!(Some("B".to_string()), visible_message(&queue));
        assert_eq!(NotificationKind::Success, queue.visible().unwrap().kind);
        assert_eq!(0, queue.pending());

        advance_to(&mut queue, ms(6000));
        assert_eq!(None, visible_message(&queue));
        assert!(queue.is_idle());
    }

    #[test]
    fn test_dismiss_promotes_next_and_cancels_timer() {
        let mut queue = queue();
        queue.info("A", NotificationOptions::default());
        advance_to(&mut queue, ms(200));
        queue.error("C", NotificationOptions::default());
        advance_to(&mut queue, ms(500));

        let first = match queue.state() {
            SlotState::Showing { ticket, .. } => *ticket,
            state => panic!("unexpected state {:?}", state),
        };

        assert!(queue.dismiss());
        assert_eq!(Some("C".to_string()), visible_message(&queue));
        assert_eq!(vec![first], queue.timer().cancelled);

        // C got a full duration from the moment it was promoted
        advance_to(&mut queue, ms(3499));
        assert_eq!(Some("C".to_string()), visible_message(&queue));
        advance_to(&mut queue, ms(3500));
        assert_eq!(None, visible_message(&queue));
    }

    #[test]
    fn test_dismiss_with_nothing_visible() {
        let mut queue = queue();
        assert!(!queue.dismiss());
        assert!(queue.is_idle());
        assert!(queue.timer().cancelled.is_empty());
    }

    #[test]
    fn test_fifo_regardless_of_kind() {
        let mut queue = queue();
        queue.error("1", NotificationOptions::default());
        queue.info("2", NotificationOptions::default());
        queue.warning("3", NotificationOptions::default());
        queue.success("4", NotificationOptions::default());
        queue.error("5", NotificationOptions::default());

        let mut shown = vec![visible_message(&queue).unwrap()];
        shown.extend(advance_to(&mut queue, ms(60_000)));

        assert_eq!(vec!["1", "2", "3", "4", "5"], shown);
    }

    #[test]
    fn test_at_most_one_visible() {
        let mut queue = queue();
        for i in 0..10 {
            queue.info(i.to_string(), NotificationOptions::default());
            assert_eq!(Some("0".to_string()), visible_message(&queue));
            assert_eq!(i, queue.pending());
        }
        // only the visible notification ever has a timer armed
        assert_eq!(1, queue.timer().armed.len());
    }

    #[test]
    fn test_invalid_kind_is_rejected() {
        let mut queue = queue();
        queue.info("A", NotificationOptions::default());

        let result = queue.enqueue("oops", "B", NotificationOptions::default());

        assert_eq!(Err(InvalidNotificationKind("oops".to_string())), result);
        assert_eq!(Some("A".to_string()), visible_message(&queue));
        assert_eq!(0, queue.pending());
    }

    #[test]
    fn test_invalid_kind_is_logged_once() {
        let mut queue = queue();
        capture_logs();

        assert!(queue.enqueue("oops", "B", NotificationOptions::default()).is_err());

        let errors = logged_at(Level::Error);
        assert_eq!(1, errors.len());
        assert!(errors[0].contains("oops"), "{}", errors[0]);
        assert_eq!(0, queue.pending());
        assert_eq!(None, queue.visible());
        assert!(queue.is_idle());
    }

    #[test]
    fn test_typed_helpers_log_info() {
        let mut queue = queue();
        capture_logs();

        queue.success("Saved", NotificationOptions::default());
        queue.warning("Careful", NotificationOptions::default());

        assert_eq!(
            vec!["notification success: Saved", "notification warning: Careful"],
            logged_at(Level::Info)
        );
        assert!(logged_at(Level::Error).is_empty());
    }

    #[test]
    fn test_invalid_kind_while_idle() {
        let mut queue = queue();
        assert!(queue.enqueue("", "B", NotificationOptions::default()).is_err());
        assert!(queue.is_idle());
        assert!(queue.timer().armed.is_empty());
    }

    #[test]
    fn test_enqueue_by_name() -> Result<(), InvalidNotificationKind> {
        let mut queue = queue();
        queue.enqueue("warning", "careful", NotificationOptions::default())?;

        assert_eq!(
            Some(&Notification {
                kind: NotificationKind::Warning,
                message: "careful".to_string(),
                duration: DEFAULT_DURATION,
                position: Position::BottomLeft,
            }),
            queue.visible()
        );
        Ok(())
    }

    #[test]
    fn test_options_override_defaults() {
        let mut queue = queue();
        queue.info(
            "A",
            NotificationOptions::default()
                .duration(ms(100))
                .position(Position::TopRight),
        );
        queue.info("B", NotificationOptions::default());

        assert_eq!(Position::TopRight, queue.visible().unwrap().position);
        advance_to(&mut queue, ms(100));
        assert_eq!(Some("B".to_string()), visible_message(&queue));
        assert_eq!(Position::BottomLeft, queue.visible().unwrap().position);
    }

    #[test]
    fn test_zero_duration_uses_default() {
        let mut queue = queue();
        queue.info("A", NotificationOptions::default().duration(Duration::ZERO));

        assert_eq!(DEFAULT_DURATION, queue.visible().unwrap().duration);
    }

    #[test]
    fn test_stale_ticket_is_ignored() {
        let mut queue = queue();
        queue.info("A", NotificationOptions::default());
        queue.info("B", NotificationOptions::default());
        queue.info("C", NotificationOptions::default());
        queue.dismiss();

        // the cancelled task for A fires anyway
        let stale = queue.timer().cancelled[0];
        queue.expire(stale);

        assert_eq!(Some("B".to_string()), visible_message(&queue));
        assert_eq!(1, queue.pending());
    }

    #[test]
    fn test_exit_delay_leaves_gap_between_notifications() {
        let mut queue = NotificationQueue::new(
            QueueConfig {
                exit_delay: ms(300),
                ..QueueConfig::default()
            },
            ManualTimer::default(),
        );
        queue.info("A", NotificationOptions::default());
        queue.info("B", NotificationOptions::default());

        advance_to(&mut queue, ms(3000));
        assert!(matches!(queue.state(), SlotState::Leaving { .. }));
        assert_eq!(None, queue.visible());

        // nothing to dismiss while leaving, and enqueues still append
        assert!(!queue.dismiss());
        queue.info("C", NotificationOptions::default());
        assert_eq!(2, queue.pending());

        advance_to(&mut queue, ms(3299));
        assert_eq!(None, queue.visible());
        advance_to(&mut queue, ms(3300));
        assert_eq!(Some("B".to_string()), visible_message(&queue));
    }

    #[test]
    fn test_exit_delay_after_dismiss() {
        let mut queue = NotificationQueue::new(
            QueueConfig {
                exit_delay: ms(300),
                ..QueueConfig::default()
            },
            ManualTimer::default(),
        );
        queue.info("A", NotificationOptions::default());
        advance_to(&mut queue, ms(100));
        queue.dismiss();

        advance_to(&mut queue, ms(400));
        assert!(queue.is_idle());
        assert!(queue.timer().armed.is_empty());
    }
}
