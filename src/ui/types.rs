use std::sync::{Arc, Mutex, PoisonError};

use chrono::Local;

pub const MAX_LOG_LINES: usize = 300;

/// Shared log buffer with a maximum capacity. Oldest lines drop first.
#[derive(Clone)]
pub struct LogBuffer {
    inner: Arc<Mutex<Vec<String>>>,
}

impl LogBuffer {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Appends `msg` prefixed with the local wall-clock time.
    pub fn push(&self, msg: String) {
        let line = format!("{} {}", Local::now().format("%H:%M:%S"), msg);
        let mut buf = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        buf.push(line);
        if buf.len() > MAX_LOG_LINES {
            buf.remove(0);
        }
    }

    pub fn lines(&self) -> Vec<String> {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Default for LogBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Which panel receives navigation keys.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Focus {
    Board,
    Moves,
}

impl Focus {
    pub fn toggle(self) -> Self {
        match self {
            Focus::Board => Focus::Moves,
            Focus::Moves => Focus::Board,
        }
    }
}
