//! Winit key name normalization.

use winit::keyboard::Key;

/// Name of a logical key as written in `[keybinds]`, before normalization.
///
/// Returns `None` for keys with no printable or named form.
pub fn key_name(key: &Key) -> Option<String> {
    match key {
        Key::Named(named) => Some(format!("{named:?}")),
        Key::Character(c) => Some(c.to_string()),
        _ => None,
    }
}

/// Convert a winit key name to the form used by the key registry.
///
/// Single characters are uppercased; `" "` becomes `"Space"` and `"Esc"`
/// becomes `"Escape"`. Other named keys pass through.
pub fn normalize_winit_key(key: &str) -> String {
    match key {
        " " | "Space" => "Space".to_string(),
        "Esc" | "Escape" => "Escape".to_string(),
        _ => {
            if key.chars().count() == 1 {
                key.to_uppercase()
            } else {
                key.to_string()
            }
        }
    }
}
