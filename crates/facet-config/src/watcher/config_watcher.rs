//! Core config file watcher implementation.
//!
//! Contains the [`ConfigWatcher`] that starts a `notify` watcher on the
//! config file's directory and the [`ConfigChanges`] handle the app polls.

use facet_common::ConfigError;
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::Instant;
use tracing::{debug, error, info, warn};

use super::debounce::Debouncer;

/// Watches a config file for changes.
pub struct ConfigWatcher {
    path: PathBuf,
}

impl ConfigWatcher {
    /// Create a new watcher for the given config file path.
    pub fn new(path: PathBuf) -> Result<Self, ConfigError> {
        if !path.exists() {
            warn!(
                "config file {} does not exist yet, will watch for creation",
                path.display()
            );
        }

        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Start watching. The returned handle must be kept alive; dropping it
    /// stops the watcher.
    ///
    /// The parent directory is watched rather than the file itself so that
    /// editors which save by write + rename are still seen.
    pub fn start(self) -> Result<ConfigChanges, ConfigError> {
        let watch_path = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();

        info!("starting config file watcher for {}", self.path.display());

        let (tx, rx) = mpsc::channel::<()>();

        let mut watcher = RecommendedWatcher::new(
            move |result: Result<Event, notify::Error>| match result {
                Ok(event) => {
                    if !matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_)) {
                        return;
                    }

                    let is_our_file = event
                        .paths
                        .iter()
                        .any(|p| p.file_name().map(|n| n == file_name).unwrap_or(false));

                    if is_our_file {
                        debug!("config file change detected");
                        let _ = tx.send(());
                    }
                }
                Err(e) => {
                    error!("file watcher error: {e}");
                }
            },
            notify::Config::default(),
        )
        .map_err(|e| ConfigError::WatchError(format!("failed to create watcher: {e}")))?;

        watcher
            .watch(&watch_path, RecursiveMode::NonRecursive)
            .map_err(|e| {
                ConfigError::WatchError(format!("failed to watch {}: {e}", watch_path.display()))
            })?;

        Ok(ConfigChanges {
            path: self.path,
            _watcher: Some(watcher),
            rx,
            debouncer: Debouncer::default(),
        })
    }
}

/// Live handle on a started watcher.
pub struct ConfigChanges {
    path: PathBuf,
    _watcher: Option<RecommendedWatcher>,
    rx: mpsc::Receiver<()>,
    debouncer: Debouncer,
}

impl ConfigChanges {
    /// Handle fed by `rx` instead of a filesystem watcher.
    pub fn from_channel(path: PathBuf, rx: mpsc::Receiver<()>, debouncer: Debouncer) -> Self {
        Self {
            path,
            _watcher: None,
            rx,
            debouncer,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Drain pending events and report whether a debounced change is due.
    pub fn poll(&mut self, now: Instant) -> bool {
        while self.rx.try_recv().is_ok() {
            self.debouncer.notify(now);
        }
        if self.debouncer.ready(now) {
            info!("config file changed, reloading");
            return true;
        }
        false
    }

    /// Whether a change has been seen but not yet reported.
    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }
}
