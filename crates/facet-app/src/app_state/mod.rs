//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Coordinates config, renderer, the active scene and input.

mod core;
mod event_handler;
mod init;
mod polling;
mod render;
mod types;

pub use core::FacetApp;
