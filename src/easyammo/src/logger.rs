//! Host logger collaborator
//!
//! The host's logger takes a message plus a colour tag and decides how to
//! present it. Everything the adjustment reports goes through [`HostLogger`];
//! nothing is printed directly.

use std::cell::RefCell;

/// Colour tag understood by the host logger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogColour {
    /// Errors and fatal conditions
    Red,
    /// Warnings about reduced functionality
    Yellow,
    /// Informational summaries
    Cyan,
    /// Debug detail
    Gray,
}

impl std::fmt::Display for LogColour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Red => write!(f, "red"),
            Self::Yellow => write!(f, "yellow"),
            Self::Cyan => write!(f, "cyan"),
            Self::Gray => write!(f, "gray"),
        }
    }
}

pub trait HostLogger {
    fn log(&self, message: &str, colour: LogColour);
}

impl<T: HostLogger + ?Sized> HostLogger for &T {
    fn log(&self, message: &str, colour: LogColour) {
        (**self).log(message, colour);
    }
}

/// Forwards host log calls to `tracing`, picking the level from the colour
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl HostLogger for TracingLogger {
    fn log(&self, message: &str, colour: LogColour) {
        match colour {
            LogColour::Red => tracing::error!(%colour, "{}", message),
            LogColour::Yellow => tracing::warn!(%colour, "{}", message),
            LogColour::Cyan => tracing::info!(%colour, "{}", message),
            LogColour::Gray => tracing::debug!(%colour, "{}", message),
        }
    }
}

/// Keeps every log call in order
#[derive(Debug, Default)]
pub struct MemoryLogger {
    entries: RefCell<Vec<(String, LogColour)>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<(String, LogColour)> {
        self.entries.borrow().clone()
    }

    /// Messages logged with the given colour
    pub fn messages(&self, colour: LogColour) -> Vec<String> {
        self.entries
            .borrow()
            .iter()
            .filter(|(_, c)| *c == colour)
            .map(|(m, _)| m.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl HostLogger for MemoryLogger {
    fn log(&self, message: &str, colour: LogColour) {
        self.entries.borrow_mut().push((message.to_string(), colour));
    }
}
