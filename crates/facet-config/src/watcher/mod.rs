//! File watcher for live config reload.
//!
//! Uses the `notify` crate to watch the config file for changes. Events
//! arrive on a std channel that the render loop polls; a 500ms debounce
//! coalesces the bursts editors produce on save.

mod config_watcher;
mod debounce;

#[cfg(test)]
mod tests;

pub use config_watcher::{ConfigChanges, ConfigWatcher};
pub use debounce::{Debouncer, DEBOUNCE_WINDOW};
