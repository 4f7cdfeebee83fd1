//! Held-key emulation on top of press-only terminal input.

use std::time::{Duration, Instant};

use game_core::PlayerInput;

use super::Control;

/// Remembers when each control was last pressed.
///
/// A control stays active until `hold` has passed without another press, or
/// until an explicit release arrives.
#[derive(Clone, Debug)]
pub struct HeldKeys {
    hold: Duration,
    last_seen: [Option<Instant>; Control::COUNT],
}

impl HeldKeys {
    pub fn new(hold: Duration) -> Self {
        Self {
            hold,
            last_seen: [None; Control::COUNT],
        }
    }

    pub fn press(&mut self, control: Control, now: Instant) {
        self.last_seen[control.index()] = Some(now);
    }

    pub fn release(&mut self, control: Control) {
        self.last_seen[control.index()] = None;
    }

    pub fn clear(&mut self) {
        self.last_seen = [None; Control::COUNT];
    }

    pub fn is_held(&self, control: Control, now: Instant) -> bool {
        self.last_seen[control.index()]
            .is_some_and(|seen| now.saturating_duration_since(seen) < self.hold)
    }

    /// Input for the frame starting at `now`.
    ///
    /// Opposite directions cancel out; diagonals are not normalized.
    pub fn input(&self, now: Instant) -> PlayerInput {
        let axis = |negative, positive| {
            f64::from(u8::from(self.is_held(positive, now)))
                - f64::from(u8::from(self.is_held(negative, now)))
        };

        let mut input = PlayerInput::moving(
            axis(Control::Left, Control::Right),
            axis(Control::Up, Control::Down),
        );
        input.attack = self.is_held(Control::Attack, now);
        input.talk = self.is_held(Control::Talk, now);
        input
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::Direction;

    const HOLD: Duration = Duration::from_millis(150);

    #[test]
    fn press_stays_active_for_the_hold_window() {
        let start = Instant::now();
        let mut keys = HeldKeys::new(HOLD);
        keys.press(Control::Right, start);

        assert!(keys.is_held(Control::Right, start + Duration::from_millis(149)));
        assert!(!keys.is_held(Control::Right, start + HOLD));
    }

    #[test]
    fn repeats_extend_the_hold() {
        let start = Instant::now();
        let mut keys = HeldKeys::new(HOLD);
        keys.press(Control::Down, start);
        keys.press(Control::Down, start + Duration::from_millis(100));

        let input = keys.input(start + Duration::from_millis(200));
        assert_eq!(input.direction, Direction::new(0.0, 1.0));
    }

    #[test]
    fn combines_axes_and_actions() {
        let now = Instant::now();
        let mut keys = HeldKeys::new(HOLD);
        keys.press(Control::Left, now);
        keys.press(Control::Up, now);
        keys.press(Control::Attack, now);

        let input = keys.input(now);
        assert_eq!(input.direction, Direction::new(-1.0, -1.0));
        assert!(input.attack);
        assert!(!input.talk);
    }

    #[test]
    fn opposite_keys_cancel() {
        let now = Instant::now();
        let mut keys = HeldKeys::new(HOLD);
        keys.press(Control::Left, now);
        keys.press(Control::Right, now);
        assert!(keys.input(now).direction.is_zero());
    }

    #[test]
    fn release_and_clear_stop_controls() {
        let now = Instant::now();
        let mut keys = HeldKeys::new(HOLD);
        keys.press(Control::Talk, now);
        keys.press(Control::Up, now);

        keys.release(Control::Talk);
        assert!(!keys.input(now).talk);

        keys.clear();
        assert_eq!(keys.input(now), PlayerInput::IDLE);
    }
}
