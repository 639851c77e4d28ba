//! Input processing for the CLI client.
//!
//! This module owns the keyboard-to-command mapping so the rest of the
//! application can remain agnostic about concrete key bindings or the
//! specifics of `crossterm` events.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// High-level outcome of processing a keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Activate the control currently on screen.
    Activate,
    /// Acknowledge the pending notice.
    DismissNotice,
    /// No meaningful command was produced.
    None,
}

/// Translates `KeyEvent`s into screen commands.
///
/// While a notice is open it is modal: only dismissal and quitting are
/// accepted.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Converts a raw key event into a higher-level command.
    pub fn handle_key(&self, key: KeyEvent, notice_open: bool) -> KeyAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        if notice_open {
            return match key.code {
                KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => KeyAction::DismissNotice,
                KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&'q') => KeyAction::Quit,
                _ => KeyAction::None,
            };
        }

        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => KeyAction::Activate,
            KeyCode::Esc => KeyAction::Quit,
            KeyCode::Char(ch) => match ch.to_ascii_lowercase() {
                'q' => KeyAction::Quit,
                'm' => KeyAction::Activate,
                _ => KeyAction::None,
            },
            _ => KeyAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn maps_activation_and_quit() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key(key(KeyCode::Enter), false), KeyAction::Activate);
        assert_eq!(handler.handle_key(key(KeyCode::Char(' ')), false), KeyAction::Activate);
        assert_eq!(handler.handle_key(key(KeyCode::Char('Q')), false), KeyAction::Quit);
        assert_eq!(handler.handle_key(key(KeyCode::Esc), false), KeyAction::Quit);
    }

    #[test]
    fn notice_is_modal() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Enter), true),
            KeyAction::DismissNotice
        );
        assert_eq!(handler.handle_key(key(KeyCode::Esc), true), KeyAction::DismissNotice);
        assert_eq!(handler.handle_key(key(KeyCode::Char('m')), true), KeyAction::None);
        assert_eq!(handler.handle_key(key(KeyCode::Char('q')), true), KeyAction::Quit);
    }

    #[test]
    fn ctrl_c_always_quits() {
        let handler = InputHandler::new();
        let ctrl_c = KeyEvent {
            modifiers: KeyModifiers::CONTROL,
            ..key(KeyCode::Char('c'))
        };
        assert_eq!(handler.handle_key(ctrl_c, true), KeyAction::Quit);
        assert_eq!(handler.handle_key(ctrl_c, false), KeyAction::Quit);
    }

    #[test]
    fn ignores_unknown_keys() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key(key(KeyCode::Char('x')), false), KeyAction::None);
        assert_eq!(handler.handle_key(key(KeyCode::Left), false), KeyAction::None);
    }
}
