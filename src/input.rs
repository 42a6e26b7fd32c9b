use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::rect::Point;
use sdl2::EventPump;

/// Actions a main-menu button can trigger
///
/// The menu only reports the action; the host decides what a transition means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuAction {
    StartGame,
    ShowHighScores,
    Quit,
}

/// Snapshot of the pointer for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerState {
    pub position: Point,
    pub primary_pressed: bool,
}

impl PointerState {
    pub fn new(x: i32, y: i32, primary_pressed: bool) -> Self {
        PointerState {
            position: Point::new(x, y),
            primary_pressed,
        }
    }

    /// Pointer at the origin with the button up; the startup "previous" state
    pub fn released() -> Self {
        PointerState::new(0, 0, false)
    }
}

impl Default for PointerState {
    fn default() -> Self {
        PointerState::released()
    }
}

/// Returns the click position on the press edge only.
///
/// A click is reported iff the primary button is down this frame and was up the
/// previous frame. Holding the button produces exactly one click; releasing it
/// produces none.
pub fn detect_click(current: PointerState, previous: PointerState) -> Option<Point> {
    if current.primary_pressed && !previous.primary_pressed {
        Some(current.position)
    } else {
        None
    }
}

/// Keeps the one frame of pointer history click detection needs
///
/// # Example
///
/// ```rust
/// let mut tracker = PointerTracker::new();
///
/// // once per frame, with fresh pointer state
/// if let Some(click) = tracker.advance(input.pointer) {
///     // hit-test buttons against `click`
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct PointerTracker {
    previous: PointerState,
}

impl PointerTracker {
    /// Starts with the button released so the first frame can't fire by itself
    pub fn new() -> Self {
        PointerTracker {
            previous: PointerState::released(),
        }
    }

    /// Detects a click for this frame, then stores `current` as the new previous
    pub fn advance(&mut self, current: PointerState) -> Option<Point> {
        let click = detect_click(current, self.previous);
        self.previous = current;
        click
    }

    #[cfg(test)]
    pub fn previous(&self) -> PointerState {
        self.previous
    }
}

/// Everything the host loop needs from one frame of input
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuInput {
    /// Window closed or Escape pressed
    pub quit_requested: bool,
    pub pointer: PointerState,
}

/// Drains SDL2 events and samples the mouse once per frame.
///
/// Button presses are read from the polled mouse state rather than from
/// `MouseButtonDown` events, so a press and release inside one frame is not seen.
/// That matches frame-sampled input and keeps click detection a pure function of
/// two snapshots.
pub struct InputSystem;

impl InputSystem {
    pub fn new() -> Self {
        InputSystem
    }

    pub fn poll(&self, event_pump: &mut EventPump) -> MenuInput {
        let mut quit_requested = false;

        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => quit_requested = true,
                Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => quit_requested = true,
                _ => {}
            }
        }

        let mouse = event_pump.mouse_state();

        MenuInput {
            quit_requested,
            pointer: PointerState::new(mouse.x(), mouse.y(), mouse.left()),
        }
    }
}

impl Default for InputSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_only_on_rising_edge() {
        let up = PointerState::new(10, 10, false);
        let down = PointerState::new(10, 10, true);

        assert_eq!(detect_click(down, up), Some(Point::new(10, 10)));
        assert_eq!(detect_click(down, down), None);
        assert_eq!(detect_click(up, down), None);
        assert_eq!(detect_click(up, up), None);
    }

    #[test]
    fn test_click_reports_current_position() {
        let previous = PointerState::new(0, 0, false);
        let current = PointerState::new(305, 205, true);
        assert_eq!(detect_click(current, previous), Some(Point::new(305, 205)));
    }

    #[test]
    fn test_identical_states_never_click() {
        for pressed in [false, true] {
            let state = PointerState::new(42, 17, pressed);
            assert_eq!(detect_click(state, state), None);
        }
    }

    #[test]
    fn test_tracker_starts_released() {
        let tracker = PointerTracker::new();
        assert!(!tracker.previous().primary_pressed);
        assert_eq!(PointerState::default(), PointerState::released());
    }

    #[test]
    fn test_tracker_fires_once_while_held() {
        let mut tracker = PointerTracker::new();
        let held = PointerState::new(5, 5, true);

        assert_eq!(tracker.advance(held), Some(Point::new(5, 5)));
        assert_eq!(tracker.advance(held), None);
        assert_eq!(tracker.advance(held), None);

        // release then press again
        assert_eq!(tracker.advance(PointerState::new(5, 5, false)), None);
        assert_eq!(tracker.advance(held), Some(Point::new(5, 5)));
    }

    #[test]
    fn test_tracker_overwrites_previous_every_frame() {
        let mut tracker = PointerTracker::new();
        let moved = PointerState::new(99, 1, false);
        tracker.advance(moved);
        assert_eq!(tracker.previous(), moved);
    }

    #[test]
    fn test_menu_action_equality() {
        assert_eq!(MenuAction::StartGame, MenuAction::StartGame);
        assert_ne!(MenuAction::StartGame, MenuAction::Quit);
    }
}
