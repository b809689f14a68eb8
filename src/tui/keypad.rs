//! The calculator keypad.
//!
//! Button labels for operator keys are exactly the symbols the brain
//! understands; the view layer hands them straight to
//! [`Evaluator::perform_operation`](crate::core::Evaluator::perform_operation).

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

/// What pressing a keypad button does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    /// Enter a digit (0-9).
    Digit(u8),
    /// Enter the decimal point.
    Decimal,
    /// Apply an operator symbol.
    Operator(&'static str),
    /// Clear the calculator and the save slot.
    Clear,
    /// Capture the current program into the save slot.
    Save,
    /// Replay the saved program.
    Restore,
}

/// A single keypad button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeypadButton {
    /// The text on the button.
    pub label: &'static str,
    /// What the button does.
    pub action: ButtonAction,
}

impl KeypadButton {
    /// Creates a digit button.
    #[must_use]
    pub const fn digit(d: u8) -> Self {
        const LABELS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];
        Self {
            label: LABELS[d as usize],
            action: ButtonAction::Digit(d),
        }
    }

    /// Creates an operator button; the label is the operator symbol itself.
    #[must_use]
    pub const fn operator(symbol: &'static str) -> Self {
        Self {
            label: symbol,
            action: ButtonAction::Operator(symbol),
        }
    }
}

/// The key grid, row-major with a partial last row.
///
/// ```text
/// [ C ] [SV ] [RS ] [ π ] [ e ]
/// [ ± ] [ √ ] [ ∛ ] [x² ] [x³ ]
/// [x⁻¹] [cos] [sin] [exp] [log]
/// [ 7 ] [ 8 ] [ 9 ] [ × ] [ ÷ ]
/// [ 4 ] [ 5 ] [ 6 ] [ + ] [ − ]
/// [ 1 ] [ 2 ] [ 3 ] [ . ] [ = ]
/// [ 0 ]
/// ```
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButton>,
    cols: usize,
    rows: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard keypad.
    #[must_use]
    pub fn new() -> Self {
        let buttons = vec![
            KeypadButton {
                label: "C",
                action: ButtonAction::Clear,
            },
            KeypadButton {
                label: "SV",
                action: ButtonAction::Save,
            },
            KeypadButton {
                label: "RS",
                action: ButtonAction::Restore,
            },
            KeypadButton::operator("π"),
            KeypadButton::operator("e"),
            KeypadButton::operator("±"),
            KeypadButton::operator("√"),
            KeypadButton::operator("∛"),
            KeypadButton::operator("x²"),
            KeypadButton::operator("x³"),
            KeypadButton::operator("x⁻¹"),
            KeypadButton::operator("cos"),
            KeypadButton::operator("sin"),
            KeypadButton::operator("exp"),
            KeypadButton::operator("log"),
            KeypadButton::digit(7),
            KeypadButton::digit(8),
            KeypadButton::digit(9),
            KeypadButton::operator("×"),
            KeypadButton::operator("÷"),
            KeypadButton::digit(4),
            KeypadButton::digit(5),
            KeypadButton::digit(6),
            KeypadButton::operator("+"),
            KeypadButton::operator("−"),
            KeypadButton::digit(1),
            KeypadButton::digit(2),
            KeypadButton::digit(3),
            KeypadButton {
                label: ".",
                action: ButtonAction::Decimal,
            },
            KeypadButton::operator("="),
            KeypadButton::digit(0),
        ];

        Self {
            buttons,
            cols: 5,
            rows: 7,
        }
    }

    /// Number of buttons.
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Grid dimensions as (rows, cols). The last row may be partial.
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Button by index, row-major.
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButton> {
        self.buttons.get(index)
    }

    /// Button by grid position.
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        if row < self.rows && col < self.cols {
            self.buttons.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Index of the button carrying a label.
    #[must_use]
    pub fn find_button_by_label(&self, label: &str) -> Option<usize> {
        self.buttons.iter().position(|b| b.label == label)
    }

    /// Iterates over all buttons.
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter()
    }

    /// Iterates over buttons with their (row, col) positions.
    pub fn buttons_with_positions(&self) -> impl Iterator<Item = ((usize, usize), &KeypadButton)> {
        self.buttons.iter().enumerate().map(move |(i, btn)| {
            let row = i / self.cols;
            let col = i % self.cols;
            ((row, col), btn)
        })
    }

    /// Maps a click position inside `area` to a button index.
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<usize> {
        if x < area.x || y < area.y || x >= area.x + area.width || y >= area.y + area.height {
            return None;
        }

        let rel_x = x - area.x;
        let rel_y = y - area.y;

        // The border ring is dead space.
        if rel_x == 0 || rel_y == 0 || rel_x >= area.width - 1 || rel_y >= area.height - 1 {
            return None;
        }

        let btn_width = (area.width - 2) / self.cols as u16;
        let btn_height = (area.height - 2) / self.rows as u16;
        if btn_width == 0 || btn_height == 0 {
            return None;
        }

        let col = ((rel_x - 1) / btn_width) as usize;
        let row = ((rel_y - 1) / btn_height) as usize;

        if row < self.rows && col < self.cols {
            let index = row * self.cols + col;
            (index < self.buttons.len()).then_some(index)
        } else {
            None
        }
    }
}

/// Renders a [`Keypad`].
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a widget over a keypad.
    #[must_use]
    pub fn new(keypad: &'a Keypad) -> Self {
        Self { keypad }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" Keys ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .render(area, buf);

        let inner = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        };

        let (rows, cols) = self.keypad.dimensions();
        if (inner.width as usize) < cols || (inner.height as usize) < rows {
            return;
        }

        let btn_width = inner.width / cols as u16;
        let btn_height = inner.height / rows as u16;

        for ((row, col), btn) in self.keypad.buttons_with_positions() {
            let x = inner.x + (col as u16 * btn_width);
            let y = inner.y + (row as u16 * btn_height) + btn_height / 2;

            let style = match btn.action {
                ButtonAction::Digit(_) | ButtonAction::Decimal => Style::default().fg(Color::White),
                ButtonAction::Operator("=") => Style::default().fg(Color::Green),
                ButtonAction::Operator(_) => Style::default().fg(Color::Yellow),
                ButtonAction::Clear => Style::default().fg(Color::Red),
                ButtonAction::Save | ButtonAction::Restore => Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            };

            if y < inner.y + inner.height {
                let label = format!("[{}]", btn.label);
                buf.set_span(x, y, &Span::styled(label, style), btn_width);
            }
        }
    }
}
