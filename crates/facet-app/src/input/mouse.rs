//! Left-button drag tracking for the mesh viewer.

/// Turns cursor movement while the left button is held into pixel deltas.
#[derive(Debug, Default)]
pub struct DragTracker {
    pressed: bool,
    last: Option<(f64, f64)>,
}

impl DragTracker {
    pub fn press(&mut self) {
        self.pressed = true;
    }

    pub fn release(&mut self) {
        self.pressed = false;
    }

    pub fn is_dragging(&self) -> bool {
        self.pressed
    }

    /// Record a cursor position; returns the delta since the previous one
    /// while the button is held.
    pub fn moved(&mut self, x: f64, y: f64) -> Option<(f64, f64)> {
        let previous = self.last.replace((x, y));
        if !self.pressed {
            return None;
        }
        let (px, py) = previous?;
        let delta = (x - px, y - py);
        if delta == (0.0, 0.0) {
            None
        } else {
            Some(delta)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_delta_without_button() {
        let mut drag = DragTracker::default();
        assert_eq!(drag.moved(10.0, 10.0), None);
        assert_eq!(drag.moved(20.0, 15.0), None);
    }

    #[test]
    fn deltas_while_pressed() {
        let mut drag = DragTracker::default();
        drag.moved(10.0, 10.0);
        drag.press();
        assert!(drag.is_dragging());
        assert_eq!(drag.moved(15.0, 8.0), Some((5.0, -2.0)));
        assert_eq!(drag.moved(15.0, 8.0), None);
        drag.release();
        assert_eq!(drag.moved(30.0, 30.0), None);
    }

    #[test]
    fn press_before_any_motion() {
        let mut drag = DragTracker::default();
        drag.press();
        assert_eq!(drag.moved(4.0, 4.0), None);
        assert_eq!(drag.moved(6.0, 4.0), Some((2.0, 0.0)));
    }
}
