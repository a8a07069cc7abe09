//! File watcher for the `generate --watch` mode.
//!
//! Watches the directory holding a form document and reports debounced
//! changes to the document itself.

use std::path::{Path, PathBuf};
use std::sync::mpsc::{Receiver, channel};
use std::time::Duration;

use notify::{RecommendedWatcher, RecursiveMode};
use notify_debouncer_mini::{DebouncedEvent, Debouncer, new_debouncer};

use crate::error::{CliResult, WatchError};

/// Event types for document changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatchEvent {
    /// The document was written.
    Modified(PathBuf),
    /// The document was deleted.
    Deleted(PathBuf),
    /// An error occurred.
    Error(String),
}

/// Watches a single form document.
pub struct FileWatcher {
    document: PathBuf,
    debounce_ms: u64,
}

impl FileWatcher {
    /// Create a new watcher for the given document.
    pub fn new(document: impl Into<PathBuf>) -> Self {
        Self {
            document: document.into(),
            debounce_ms: 300,
        }
    }

    /// Set the debounce duration in milliseconds.
    pub fn with_debounce(mut self, ms: u64) -> Self {
        self.debounce_ms = ms;
        self
    }

    /// Start watching.
    ///
    /// Keep the returned debouncer alive for as long as events are wanted.
    pub fn watch(&self) -> CliResult<(Debouncer<RecommendedWatcher>, Receiver<WatchEvent>)> {
        let (tx, rx) = channel::<WatchEvent>();
        let target = self.document.file_name().map(|n| n.to_os_string());

        let mut debouncer = new_debouncer(
            Duration::from_millis(self.debounce_ms),
            move |result: Result<Vec<DebouncedEvent>, notify::Error>| match result {
                Ok(events) => {
                    for event in events {
                        if event.path.file_name().map(|n| n.to_os_string()) != target {
                            continue;
                        }
                        let _ = tx.send(classify(event.path));
                    }
                }
                Err(e) => {
                    let _ = tx.send(WatchEvent::Error(e.to_string()));
                }
            },
        )
        .map_err(|e| WatchError::Init(e.to_string()))?;

        debouncer
            .watcher()
            .watch(self.watch_root(), RecursiveMode::NonRecursive)
            .map_err(|e| WatchError::Notify(e.to_string()))?;

        tracing::debug!(document = %self.document.display(), "watching document");
        Ok((debouncer, rx))
    }

    /// Get the document being watched.
    pub fn document(&self) -> &Path {
        &self.document
    }

    /// Directory registered with the OS watcher.
    fn watch_root(&self) -> &Path {
        match self.document.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }
}

fn classify(path: PathBuf) -> WatchEvent {
    if path.exists() {
        WatchEvent::Modified(path)
    } else {
        WatchEvent::Deleted(path)
    }
}

impl WatchEvent {
    /// Get the path associated with this event.
    pub fn path(&self) -> Option<&Path> {
        match self {
            WatchEvent::Modified(p) | WatchEvent::Deleted(p) => Some(p),
            WatchEvent::Error(_) => None,
        }
    }

    /// Check if this is an error event.
    pub fn is_error(&self) -> bool {
        matches!(self, WatchEvent::Error(_))
    }

    /// Get the error message if this is an error event.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            WatchEvent::Error(msg) => Some(msg),
            _ => None,
        }
    }
}
