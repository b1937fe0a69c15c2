//! Shared range-validation helpers used by all domain validators.

use facet_common::Color;

/// Push an error if `value` is outside `[min, max]` (integer).
pub(crate) fn validate_range(errors: &mut Vec<String>, name: &str, value: u32, min: u32, max: u32) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error if `value` is outside `[min, max]` (float). NaN is rejected.
pub(crate) fn validate_range_f32(
    errors: &mut Vec<String>,
    name: &str,
    value: f32,
    min: f32,
    max: f32,
) {
    if !(min..=max).contains(&value) {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Range-check every channel of an RGB triple.
pub(crate) fn validate_rgb(errors: &mut Vec<String>, name: &str, value: [f32; 3], min: f32, max: f32) {
    for (channel, v) in ["r", "g", "b"].iter().zip(value) {
        validate_range_f32(errors, &format!("{name}.{channel}"), v, min, max);
    }
}

/// Push an error if `value` is not a `#rrggbb` / `#rrggbbaa` color.
pub(crate) fn validate_color(errors: &mut Vec<String>, name: &str, value: &str) {
    if Color::from_hex(value).is_none() {
        errors.push(format!("{name} = \"{value}\" is not a hex color"));
    }
}
