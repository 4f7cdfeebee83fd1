use crate::state::Direction;

/// Player intent for one frame.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerInput {
    pub direction: Direction,
    pub attack: bool,
    pub talk: bool,
}

impl PlayerInput {
    pub const IDLE: Self = Self {
        direction: Direction::ZERO,
        attack: false,
        talk: false,
    };

    pub fn moving(dx: f64, dy: f64) -> Self {
        Self {
            direction: Direction::new(dx, dy),
            ..Self::IDLE
        }
    }

    pub fn with_attack(mut self) -> Self {
        self.attack = true;
        self
    }

    pub fn with_talk(mut self) -> Self {
        self.talk = true;
        self
    }
}
