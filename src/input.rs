//! Input adapters
//!
//! Keyboard, touch and on-screen buttons all reduce to a single desired
//! [`Direction`] that the host writes into the game between ticks.

use crate::consts::SWIPE_MIN_DISTANCE;
use crate::sim::Direction;

/// Map a DOM-style key name (`KeyboardEvent.key`) to a direction
pub fn direction_for_key(key: &str) -> Option<Direction> {
    match key {
        "ArrowUp" => Some(Direction::Up),
        "ArrowDown" => Some(Direction::Down),
        "ArrowLeft" => Some(Direction::Left),
        "ArrowRight" => Some(Direction::Right),
        _ => None,
    }
}

/// Direction of a swipe gesture along its dominant axis.
///
/// `dx`/`dy` are screen deltas (+y down). Gestures shorter than
/// [`SWIPE_MIN_DISTANCE`] are taps and yield `None`; an exact diagonal
/// resolves to the vertical axis.
pub fn direction_for_swipe(dx: f32, dy: f32) -> Option<Direction> {
    if !dx.is_finite() || !dy.is_finite() {
        return None;
    }
    if dx.abs().max(dy.abs()) < SWIPE_MIN_DISTANCE {
        return None;
    }

    let dir = if dx.abs() > dy.abs() {
        if dx > 0.0 {
            Direction::Right
        } else {
            Direction::Left
        }
    } else if dy > 0.0 {
        Direction::Down
    } else {
        Direction::Up
    };
    Some(dir)
}

/// Map an on-screen button label to a direction
pub fn direction_for_button(label: &str) -> Option<Direction> {
    match label.to_lowercase().as_str() {
        "up" => Some(Direction::Up),
        "down" => Some(Direction::Down),
        "left" => Some(Direction::Left),
        "right" => Some(Direction::Right),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_keys() {
        assert_eq!(direction_for_key("ArrowUp"), Some(Direction::Up));
        assert_eq!(direction_for_key("ArrowDown"), Some(Direction::Down));
        assert_eq!(direction_for_key("ArrowLeft"), Some(Direction::Left));
        assert_eq!(direction_for_key("ArrowRight"), Some(Direction::Right));
        assert_eq!(direction_for_key("Enter"), None);
        assert_eq!(direction_for_key("arrowup"), None);
    }

    #[test]
    fn test_swipe_dominant_axis() {
        assert_eq!(direction_for_swipe(80.0, 10.0), Some(Direction::Right));
        assert_eq!(direction_for_swipe(-80.0, 30.0), Some(Direction::Left));
        assert_eq!(direction_for_swipe(5.0, 60.0), Some(Direction::Down));
        assert_eq!(direction_for_swipe(-20.0, -60.0), Some(Direction::Up));
        assert_eq!(direction_for_swipe(40.0, 40.0), Some(Direction::Down));
    }

    #[test]
    fn test_short_swipe_is_a_tap() {
        assert_eq!(direction_for_swipe(10.0, -12.0), None);
        assert_eq!(direction_for_swipe(0.0, 0.0), None);
        assert_eq!(direction_for_swipe(f32::NAN, 100.0), None);
    }

    #[test]
    fn test_buttons() {
        assert_eq!(direction_for_button("Up"), Some(Direction::Up));
        assert_eq!(direction_for_button("LEFT"), Some(Direction::Left));
        assert_eq!(direction_for_button("fire"), None);
    }
}
