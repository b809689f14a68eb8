//! Keyboard input handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Actions triggered by keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Enter a digit or the decimal point.
    TouchDigit(char),
    /// Apply an operator symbol.
    Operate(&'static str),
    /// Drop the last typed character.
    Backspace,
    /// Clear the calculator and the save slot.
    Clear,
    /// Capture the current program into the save slot.
    Save,
    /// Replay the saved program.
    Restore,
    /// Quit the application.
    Quit,
    /// Ignored input.
    None,
}

/// Maps key events to actions.
///
/// Ascii arithmetic keys map onto the calculator's display symbols
/// (`*` is `×`, `-` is `−`); the function keys get mnemonic letters.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action.
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code, modifiers, ..
        } = event;

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Char(c @ ('0'..='9' | '.')) => KeyAction::TouchDigit(c),
            KeyCode::Char('+') => KeyAction::Operate("+"),
            KeyCode::Char('-') => KeyAction::Operate("−"),
            KeyCode::Char('*') => KeyAction::Operate("×"),
            KeyCode::Char('/') => KeyAction::Operate("÷"),
            KeyCode::Char('=') | KeyCode::Enter => KeyAction::Operate("="),
            KeyCode::Char('p') => KeyAction::Operate("π"),
            KeyCode::Char('e') => KeyAction::Operate("e"),
            KeyCode::Char('n') => KeyAction::Operate("±"),
            KeyCode::Char('v') => KeyAction::Operate("√"),
            KeyCode::Char('b') => KeyAction::Operate("∛"),
            KeyCode::Char('q') => KeyAction::Operate("x²"),
            KeyCode::Char('u') => KeyAction::Operate("x³"),
            KeyCode::Char('i') => KeyAction::Operate("x⁻¹"),
            KeyCode::Char('s') => KeyAction::Operate("sin"),
            KeyCode::Char('o') => KeyAction::Operate("cos"),
            KeyCode::Char('x') => KeyAction::Operate("exp"),
            KeyCode::Char('l') => KeyAction::Operate("log"),
            KeyCode::Char('S') => KeyAction::Save,
            KeyCode::Char('R') => KeyAction::Restore,
            KeyCode::Char('c' | 'C') | KeyCode::Esc => KeyAction::Clear,
            KeyCode::Backspace => KeyAction::Backspace,
            _ => KeyAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn shifted(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::SHIFT)
    }

    // ===== Digits =====

    #[test]
    fn test_digits_and_decimal_point() {
        let handler = InputHandler::new();
        for c in '0'..='9' {
            assert_eq!(
                handler.handle_key(key(KeyCode::Char(c))),
                KeyAction::TouchDigit(c)
            );
        }
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('.'))),
            KeyAction::TouchDigit('.')
        );
    }

    // ===== Operators =====

    #[test]
    fn test_ascii_arithmetic_maps_to_display_symbols() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('+'))),
            KeyAction::Operate("+")
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('-'))),
            KeyAction::Operate("−")
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('*'))),
            KeyAction::Operate("×")
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('/'))),
            KeyAction::Operate("÷")
        );
    }

    #[test]
    fn test_equals_and_enter() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('='))),
            KeyAction::Operate("=")
        );
        assert_eq!(handler.handle_key(key(KeyCode::Enter)), KeyAction::Operate("="));
    }

    #[test]
    fn test_function_mnemonics() {
        let handler = InputHandler::new();
        let cases = [
            ('p', "π"),
            ('e', "e"),
            ('n', "±"),
            ('v', "√"),
            ('b', "∛"),
            ('q', "x²"),
            ('u', "x³"),
            ('i', "x⁻¹"),
            ('s', "sin"),
            ('o', "cos"),
            ('x', "exp"),
            ('l', "log"),
        ];
        for (c, symbol) in cases {
            assert_eq!(
                handler.handle_key(key(KeyCode::Char(c))),
                KeyAction::Operate(symbol),
                "key {c}"
            );
        }
    }

    #[test]
    fn test_mapped_symbols_are_known_to_the_brain() {
        let handler = InputHandler::new();
        for c in "+-*/=penvbquisoxl".chars() {
            if let KeyAction::Operate(symbol) = handler.handle_key(key(KeyCode::Char(c))) {
                assert!(
                    crate::core::ops::lookup(symbol).is_some(),
                    "{c} maps to unknown symbol {symbol}"
                );
            }
        }
    }

    // ===== Control actions =====

    #[test]
    fn test_save_restore_clear() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key(shifted('S')), KeyAction::Save);
        assert_eq!(handler.handle_key(shifted('R')), KeyAction::Restore);
        assert_eq!(handler.handle_key(key(KeyCode::Char('c'))), KeyAction::Clear);
        assert_eq!(handler.handle_key(key(KeyCode::Esc)), KeyAction::Clear);
    }

    #[test]
    fn test_backspace() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key(key(KeyCode::Backspace)), KeyAction::Backspace);
    }

    #[test]
    fn test_quit_combinations() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key(ctrl('c')), KeyAction::Quit);
        assert_eq!(handler.handle_key(ctrl('q')), KeyAction::Quit);
    }

    #[test]
    fn test_other_ctrl_keys_ignored() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key(ctrl('s')), KeyAction::None);
        assert_eq!(handler.handle_key(ctrl('z')), KeyAction::None);
    }

    #[test]
    fn test_unmapped_keys_ignored() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key(key(KeyCode::Char('z'))), KeyAction::None);
        assert_eq!(handler.handle_key(key(KeyCode::Tab)), KeyAction::None);
        assert_eq!(handler.handle_key(key(KeyCode::Left)), KeyAction::None);
    }
}
