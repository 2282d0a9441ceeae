use std::sync::{Arc, Mutex};

/// Where failed requests are surfaced to the user.
pub trait ErrorReporter {
    fn report(&self, message: &str);
}

/// Writes reports to the error log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl ErrorReporter for LogReporter {
    fn report(&self, message: &str) {
        log::error!("{}", message);
    }
}

/// Keeps every report so a front end can show and dismiss them.
#[derive(Debug, Default, Clone)]
pub struct CollectingReporter {
    messages: Arc<Mutex<Vec<String>>>,
}

impl CollectingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .map(|messages| messages.clone())
            .unwrap_or_default()
    }

    /// Removes and returns every pending report.
    pub fn dismiss(&self) -> Vec<String> {
        self.messages
            .lock()
            .map(|mut messages| std::mem::take(&mut *messages))
            .unwrap_or_default()
    }
}

impl ErrorReporter for CollectingReporter {
    fn report(&self, message: &str) {
        log::error!("{}", message);
        if let Ok(mut messages) = self.messages.lock() {
            messages.push(message.to_string());
        }
    }
}
