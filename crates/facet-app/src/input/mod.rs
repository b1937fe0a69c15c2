//! Keyboard and mouse input: key names, bound actions and drag tracking.

mod actions;
mod mouse;
mod registry;
mod winit_keys;

pub use actions::Action;
pub use mouse::DragTracker;
pub use registry::KeyRegistry;
pub use winit_keys::key_name;
