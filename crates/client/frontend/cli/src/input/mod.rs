//! Input processing for the CLI client.
//!
//! This module owns the keyboard-to-command mapping so the rest of the
//! application can remain agnostic about concrete key bindings or the
//! specifics of `crossterm` events.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

mod held;
pub use held::HeldKeys;

/// Game controls a key can drive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    Left,
    Right,
    Up,
    Down,
    Attack,
    Talk,
}

impl Control {
    /// Number of controls, for per-control tables.
    pub const COUNT: usize = 6;

    const fn index(self) -> usize {
        self as usize
    }
}

/// High-level outcome of processing a keyboard event.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// A control was pressed or auto-repeated.
    Press(Control),
    /// A control was released (only on terminals that report releases).
    Release(Control),
    /// No meaningful command was produced.
    None,
}

/// Translates `KeyEvent`s into game controls.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Converts a raw key event into a higher-level command.
    pub fn handle_key(&self, key: KeyEvent) -> KeyAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        let Some(action) = self.map_code(key.code) else {
            return KeyAction::None;
        };

        match (action, key.kind) {
            (KeyAction::Press(control), KeyEventKind::Release) => KeyAction::Release(control),
            (KeyAction::Quit, KeyEventKind::Release) => KeyAction::None,
            (action, _) => action,
        }
    }

    fn map_code(&self, code: KeyCode) -> Option<KeyAction> {
        let control = match code {
            KeyCode::Esc => return Some(KeyAction::Quit),
            KeyCode::Left => Control::Left,
            KeyCode::Right => Control::Right,
            KeyCode::Up => Control::Up,
            KeyCode::Down => Control::Down,
            KeyCode::Char(raw) => match raw.to_ascii_lowercase() {
                'q' => return Some(KeyAction::Quit),
                'h' | 'a' => Control::Left,
                'j' | 's' => Control::Down,
                'k' | 'w' => Control::Up,
                'l' | 'd' => Control::Right,
                ' ' | 'f' => Control::Attack,
                't' | 'e' => Control::Talk,
                _ => return None,
            },
            _ => return None,
        };
        Some(KeyAction::Press(control))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn maps_movement_keys() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('h'))),
            KeyAction::Press(Control::Left)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('W'))),
            KeyAction::Press(Control::Up)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Down)),
            KeyAction::Press(Control::Down)
        );
    }

    #[test]
    fn maps_attack_talk_and_quit() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Char(' '))),
            KeyAction::Press(Control::Attack)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('t'))),
            KeyAction::Press(Control::Talk)
        );
        assert_eq!(handler.handle_key(key(KeyCode::Char('q'))), KeyAction::Quit);
        assert_eq!(handler.handle_key(key(KeyCode::Esc)), KeyAction::Quit);

        let mut ctrl_c = key(KeyCode::Char('c'));
        ctrl_c.modifiers = KeyModifiers::CONTROL;
        assert_eq!(handler.handle_key(ctrl_c), KeyAction::Quit);
    }

    #[test]
    fn reports_releases() {
        let handler = InputHandler::new();
        let mut released = key(KeyCode::Right);
        released.kind = KeyEventKind::Release;
        assert_eq!(
            handler.handle_key(released),
            KeyAction::Release(Control::Right)
        );
    }

    #[test]
    fn ignores_unknown_keys() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key(key(KeyCode::Char('x'))), KeyAction::None);
        assert_eq!(handler.handle_key(key(KeyCode::Tab)), KeyAction::None);
    }
}
