//! Input processing for the terminal client.
//!
//! Owns the keyboard-to-command mapping so the event loop stays agnostic
//! about concrete key bindings.
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// High-level outcome of processing a keyboard event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Press the spin button.
    Spin,
    /// No meaningful command was produced.
    None,
}

/// Translates `KeyEvent`s into client commands.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Converts a raw key event into a command.
    ///
    /// `spin_enabled` mirrors the button state: spin keys map to
    /// [`KeyAction::None`] while the button is disabled.
    pub fn handle_key(&self, key: KeyEvent, spin_enabled: bool) -> KeyAction {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
            KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
            KeyCode::Char(' ') | KeyCode::Enter if spin_enabled => KeyAction::Spin,
            _ => KeyAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn spin_keys_follow_button_state() {
        let input = InputHandler::new();
        assert_eq!(input.handle_key(press(KeyCode::Char(' ')), true), KeyAction::Spin);
        assert_eq!(input.handle_key(press(KeyCode::Enter), true), KeyAction::Spin);
        assert_eq!(input.handle_key(press(KeyCode::Char(' ')), false), KeyAction::None);
        assert_eq!(input.handle_key(press(KeyCode::Enter), false), KeyAction::None);
    }

    #[test]
    fn quit_keys_always_quit() {
        let input = InputHandler::new();
        for spinning in [true, false] {
            assert_eq!(input.handle_key(press(KeyCode::Char('q')), spinning), KeyAction::Quit);
            assert_eq!(input.handle_key(press(KeyCode::Esc), spinning), KeyAction::Quit);
        }
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(input.handle_key(ctrl_c, false), KeyAction::Quit);
    }

    #[test]
    fn other_keys_are_ignored() {
        let input = InputHandler::new();
        assert_eq!(input.handle_key(press(KeyCode::Char('x')), true), KeyAction::None);
        assert_eq!(input.handle_key(press(KeyCode::Char('c')), true), KeyAction::None);
    }
}
