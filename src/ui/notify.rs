use std::time::{Duration, Instant};

use log::{error, info};

/// Spinner and snackbar feedback used by the controller.
pub trait Notifier {
    fn busy(&mut self, message: &str);
    fn idle(&mut self);
    fn success(&mut self, message: &str);
    fn error(&mut self, message: &str);
}

const SPINNER_FRAMES: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Snackbar {
    pub message: String,
    pub severity: Severity,
    expires_at: Instant,
}

/// Terminal status line: a spinner while work is pending and a snackbar that expires.
#[derive(Debug)]
pub struct StatusBar {
    busy: Option<String>,
    frame: usize,
    snackbar: Option<Snackbar>,
    ttl: Duration,
}

impl StatusBar {
    pub fn new(ttl: Duration) -> Self {
        Self {
            busy: None,
            frame: 0,
            snackbar: None,
            ttl,
        }
    }

    /// Advance the spinner and drop an expired snackbar.
    pub fn tick(&mut self, now: Instant) {
        if self.busy.is_some() {
            self.frame = (self.frame + 1) % SPINNER_FRAMES.len();
        }
        if self
            .snackbar
            .as_ref()
            .is_some_and(|snackbar| now >= snackbar.expires_at)
        {
            self.snackbar = None;
        }
    }

    pub fn busy_message(&self) -> Option<&str> {
        self.busy.as_deref()
    }

    pub fn spinner(&self) -> char {
        SPINNER_FRAMES[self.frame]
    }

    pub fn snackbar(&self) -> Option<&Snackbar> {
        self.snackbar.as_ref()
    }

    fn post(&mut self, message: &str, severity: Severity) {
        self.snackbar = Some(Snackbar {
            message: message.to_string(),
            severity,
            expires_at: Instant::now() + self.ttl,
        });
    }
}

impl Notifier for StatusBar {
    fn busy(&mut self, message: &str) {
        if self.busy.is_none() {
            self.frame = 0;
        }
        self.busy = Some(message.to_string());
    }

    fn idle(&mut self) {
        self.busy = None;
    }

    fn success(&mut self, message: &str) {
        info!("{}", message);
        self.post(message, Severity::Success);
    }

    fn error(&mut self, message: &str) {
        error!("{}", message);
        self.post(message, Severity::Error);
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::Notifier;

    #[derive(Clone, Debug, PartialEq)]
    pub enum Note {
        Busy(String),
        Idle,
        Success(String),
        Error(String),
    }

    #[derive(Default)]
    pub struct RecordingNotifier {
        pub notes: Vec<Note>,
    }

    impl RecordingNotifier {
        pub fn errors(&self) -> Vec<&str> {
            self.notes
                .iter()
                .filter_map(|note| match note {
                    Note::Error(message) => Some(message.as_str()),
                    _ => None,
                })
                .collect()
        }

        pub fn successes(&self) -> Vec<&str> {
            self.notes
                .iter()
                .filter_map(|note| match note {
                    Note::Success(message) => Some(message.as_str()),
                    _ => None,
                })
                .collect()
        }
    }

    impl Notifier for RecordingNotifier {
        fn busy(&mut self, message: &str) {
            self.notes.push(Note::Busy(message.to_string()));
        }

        fn idle(&mut self) {
            self.notes.push(Note::Idle);
        }

        fn success(&mut self, message: &str) {
            self.notes.push(Note::Success(message.to_string()));
        }

        fn error(&mut self, message: &str) {
            self.notes.push(Note::Error(message.to_string()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snackbar_expires_after_ttl() {
        let mut status = StatusBar::new(Duration::from_millis(200));
        status.success("List filtered.");

        status.tick(Instant::now());
        assert_eq!(
            status.snackbar().map(|s| s.severity),
            Some(Severity::Success)
        );

        status.tick(Instant::now() + Duration::from_secs(1));
        assert!(status.snackbar().is_none());
    }

    #[test]
    fn spinner_only_turns_while_busy() {
        let mut status = StatusBar::new(Duration::from_secs(1));
        let now = Instant::now();

        status.tick(now);
        assert_eq!(status.spinner(), SPINNER_FRAMES[0]);

        status.busy("Loading AAA");
        status.tick(now);
        status.tick(now);
        assert_eq!(status.spinner(), SPINNER_FRAMES[2]);
        assert_eq!(status.busy_message(), Some("Loading AAA"));

        status.idle();
        assert!(status.busy_message().is_none());
    }

    #[test]
    fn newer_message_replaces_snackbar() {
        let mut status = StatusBar::new(Duration::from_secs(5));
        status.success("List filtered.");
        status.error("request failed");

        let snackbar = status.snackbar().unwrap();
        assert_eq!(snackbar.message, "request failed");
        assert_eq!(snackbar.severity, Severity::Error);
    }
}
