//! Application state: the display, the digit-typing state, and the single
//! saved-program slot, wired to the brain.
//!
//! Digit entry follows pocket-calculator rules: the first digit replaces the
//! display and starts a number, further digits append, a second decimal
//! point in one number is refused. Operator keys flush the typed number into
//! the brain before the operation is applied.

use crate::core::{format_value, Evaluator, Program};

use super::input::KeyAction;
use super::keypad::ButtonAction;

/// Calculator application state.
#[derive(Debug)]
pub struct CalculatorApp {
    /// Text in the main display.
    display: String,
    /// True while the user is in the middle of typing a number.
    typing: bool,
    /// The brain.
    brain: Evaluator,
    /// The one saved program. Set by save, consumed by restore, dropped by
    /// clear.
    saved_program: Option<Program>,
    /// Whether the app should quit.
    should_quit: bool,
}

impl Default for CalculatorApp {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorApp {
    /// Creates the app showing 0.
    #[must_use]
    pub fn new() -> Self {
        Self {
            display: "0".to_string(),
            typing: false,
            brain: Evaluator::new(),
            saved_program: None,
            should_quit: false,
        }
    }

    /// The display text.
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// True while a number is being typed.
    #[must_use]
    pub fn is_typing(&self) -> bool {
        self.typing
    }

    /// True if a program is in the save slot.
    #[must_use]
    pub fn has_saved_program(&self) -> bool {
        self.saved_program.is_some()
    }

    /// The brain, for read-only inspection.
    #[must_use]
    pub fn brain(&self) -> &Evaluator {
        &self.brain
    }

    /// Whether the app should quit.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// The history label: the description plus `...` while a binary
    /// operation is pending, `=` once the result is final.
    #[must_use]
    pub fn history_line(&self) -> String {
        let suffix = if self.brain.is_partial_result() {
            "..."
        } else {
            "="
        };
        format!("{}{suffix}", self.brain.description())
    }

    /// Handles a digit or decimal-point key.
    pub fn touch_digit(&mut self, digit: char) {
        if self.typing {
            if digit == '.' && self.display.contains('.') {
                return;
            }
            self.display.push(digit);
        } else {
            self.display.clear();
            self.display.push(digit);
            self.typing = true;
        }
    }

    /// Drops the last typed character; leaving the number empty shows 0.
    pub fn backspace(&mut self) {
        if !self.typing {
            return;
        }
        self.display.pop();
        if self.display.is_empty() {
            self.display.push('0');
            self.typing = false;
        }
    }

    /// Applies an operator key: flushes any number being typed into the
    /// brain, performs the operation, and reflects the result.
    pub fn operate(&mut self, symbol: &str) {
        if self.typing {
            self.brain.set_operand(self.display_value());
            self.typing = false;
        }
        self.brain.perform_operation(symbol);
        self.display = format_value(self.brain.result());
    }

    /// Captures the current program into the save slot.
    pub fn save(&mut self) {
        self.saved_program = Some(self.brain.program());
    }

    /// Replays the saved program, if any.
    pub fn restore(&mut self) {
        if let Some(program) = self.saved_program.clone() {
            self.brain.set_program(&program);
            self.typing = false;
            self.display = format_value(self.brain.result());
        }
    }

    /// Resets the display, the brain, and the save slot.
    pub fn clear(&mut self) {
        self.typing = false;
        self.saved_program = None;
        self.brain.clear();
        self.display = format_value(self.brain.result());
    }

    /// Dispatches a keypad button press.
    pub fn press(&mut self, action: ButtonAction) {
        match action {
            ButtonAction::Digit(d) => self.touch_digit((b'0' + d) as char),
            ButtonAction::Decimal => self.touch_digit('.'),
            ButtonAction::Operator(symbol) => self.operate(symbol),
            ButtonAction::Clear => self.clear(),
            ButtonAction::Save => self.save(),
            ButtonAction::Restore => self.restore(),
        }
    }

    /// Dispatches a keyboard action. Returns true when the app should quit.
    pub fn apply(&mut self, action: KeyAction) -> bool {
        match action {
            KeyAction::TouchDigit(c) => self.touch_digit(c),
            KeyAction::Operate(symbol) => self.operate(symbol),
            KeyAction::Backspace => self.backspace(),
            KeyAction::Clear => self.clear(),
            KeyAction::Save => self.save(),
            KeyAction::Restore => self.restore(),
            KeyAction::Quit => self.quit(),
            KeyAction::None => {}
        }
        self.should_quit
    }

    /// The display parsed as a number. An unfinished number (a lone `.`)
    /// counts as 0.
    fn display_value(&self) -> f64 {
        self.display.parse().unwrap_or(0.0)
    }
}
