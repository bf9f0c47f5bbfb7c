//! Frame-coherent pointer state tracker.
//!
//! [`PointerState`] folds winit cursor events into a latest-value snapshot
//! that renderers read once per animation frame. Events are never queued;
//! the last event before a frame wins.

use glam::Vec2;
use winit::event::{ElementState, MouseButton};

/// Per-button press/release tracking for a single frame.
#[derive(Debug, Clone, Copy, Default)]
struct ButtonFrame {
    pressed: bool,
    just_pressed: bool,
    just_released: bool,
}

/// Maps a [`MouseButton`] to an index 0..3.
fn button_index(button: MouseButton) -> usize {
    match button {
        MouseButton::Left => 0,
        MouseButton::Right => 1,
        _ => 2,
    }
}

/// Latest-value pointer snapshot.
///
/// # Usage
///
/// 1. Forward winit events via the `on_*` methods as they arrive.
/// 2. Renderers query the snapshot during their frame update.
/// 3. Call [`clear_transients`](Self::clear_transients) at end of frame.
#[derive(Debug, Clone, Default)]
pub struct PointerState {
    position: Vec2,
    prev_position: Vec2,
    delta: Vec2,
    buttons: [ButtonFrame; 3],
    in_surface: bool,
}

impl PointerState {
    /// Creates a new `PointerState` with all fields zeroed/false.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ── Event handlers ──────────────────────────────────────────────

    /// Process a `CursorMoved` event. Overwrites the previous position;
    /// the per-frame delta accumulates for drag handling.
    pub fn on_cursor_moved(&mut self, x: f64, y: f64) {
        let new_pos = Vec2::new(x as f32, y as f32);
        self.delta += new_pos - self.position;
        self.position = new_pos;
    }

    /// Process a `CursorEntered` event.
    pub fn on_cursor_entered(&mut self) {
        self.in_surface = true;
    }

    /// Process a `CursorLeft` event.
    pub fn on_cursor_left(&mut self) {
        self.in_surface = false;
    }

    /// Process a `MouseInput` event.
    pub fn on_button(&mut self, button: MouseButton, state: ElementState) {
        let idx = button_index(button);
        match state {
            ElementState::Pressed => {
                self.buttons[idx].pressed = true;
                self.buttons[idx].just_pressed = true;
            }
            ElementState::Released => {
                self.buttons[idx].pressed = false;
                self.buttons[idx].just_released = true;
            }
        }
    }

    /// Clears per-frame transients: delta, just_pressed, just_released.
    pub fn clear_transients(&mut self) {
        self.prev_position = self.position;
        self.delta = Vec2::ZERO;
        for b in &mut self.buttons {
            b.just_pressed = false;
            b.just_released = false;
        }
    }

    // ── Queries ─────────────────────────────────────────────────────

    /// Current cursor position in logical surface coordinates.
    #[must_use]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Movement delta accumulated since the last frame clear.
    #[must_use]
    pub fn delta(&self) -> Vec2 {
        self.delta
    }

    /// Whether the cursor is inside the render surface.
    #[must_use]
    pub fn in_surface(&self) -> bool {
        self.in_surface
    }

    /// The pointer position, but only while the cursor is over the surface.
    #[must_use]
    pub fn active_position(&self) -> Option<Vec2> {
        self.in_surface.then_some(self.position)
    }

    /// Whether a button is currently held.
    #[must_use]
    pub fn is_pressed(&self, button: MouseButton) -> bool {
        self.buttons[button_index(button)].pressed
    }

    /// Whether a button was pressed this frame.
    #[must_use]
    pub fn just_pressed(&self, button: MouseButton) -> bool {
        self.buttons[button_index(button)].just_pressed
    }

    /// Whether a button was released this frame.
    #[must_use]
    pub fn just_released(&self, button: MouseButton) -> bool {
        self.buttons[button_index(button)].just_released
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_updates_on_move() {
        let mut ps = PointerState::new();
        ps.on_cursor_moved(100.0, 200.0);
        assert_eq!(ps.position(), Vec2::new(100.0, 200.0));
    }

    #[test]
    fn test_last_event_wins() {
        let mut ps = PointerState::new();
        ps.on_cursor_moved(10.0, 10.0);
        ps.on_cursor_moved(50.0, 60.0);
        ps.on_cursor_moved(30.0, 40.0);
        // Only the final position is observable; intermediate moves fold away.
        assert_eq!(ps.position(), Vec2::new(30.0, 40.0));
    }

    #[test]
    fn test_delta_accumulates_within_frame() {
        let mut ps = PointerState::new();
        ps.on_cursor_moved(100.0, 200.0);
        ps.clear_transients();
        ps.on_cursor_moved(110.0, 195.0);
        ps.on_cursor_moved(120.0, 190.0);
        let d = ps.delta();
        assert!((d.x - 20.0).abs() < f32::EPSILON);
        assert!((d.y - (-10.0)).abs() < f32::EPSILON);
    }

    #[test]
    fn test_active_position_requires_enter() {
        let mut ps = PointerState::new();
        ps.on_cursor_moved(5.0, 5.0);
        assert_eq!(ps.active_position(), None);
        ps.on_cursor_entered();
        assert_eq!(ps.active_position(), Some(Vec2::new(5.0, 5.0)));
        ps.on_cursor_left();
        assert_eq!(ps.active_position(), None);
    }

    #[test]
    fn test_button_transients_clear() {
        let mut ps = PointerState::new();
        ps.on_button(MouseButton::Left, ElementState::Pressed);
        assert!(ps.is_pressed(MouseButton::Left));
        assert!(ps.just_pressed(MouseButton::Left));
        ps.clear_transients();
        assert!(ps.is_pressed(MouseButton::Left));
        assert!(!ps.just_pressed(MouseButton::Left));

        ps.on_button(MouseButton::Left, ElementState::Released);
        assert!(!ps.is_pressed(MouseButton::Left));
        assert!(ps.just_released(MouseButton::Left));
        ps.clear_transients();
        assert!(!ps.just_released(MouseButton::Left));
    }
}
