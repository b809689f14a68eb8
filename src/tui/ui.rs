//! Terminal rendering.
//!
//! Widgets render into plain buffers so tests can assert on cell content.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::{Keypad, KeypadWidget};

const HELP_SHORTCUTS: &[(&str, &str)] = &[
    ("0-9 .", "type a number"),
    ("+-*/", "operators"),
    ("Enter", "equals"),
    ("Bksp", "undo a digit"),
    ("p e", "π, e"),
    ("n v b", "±, √, ∛"),
    ("q u i", "x², x³, x⁻¹"),
    ("s o", "sin, cos"),
    ("x l", "exp, log"),
    ("S / R", "save / restore"),
    ("c, Esc", "clear"),
    ("Ctrl+q", "quit"),
];

/// Renders the whole calculator UI into the frame.
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(CalculatorUi::new(app), area);
}

/// The calculator screen: history, display, save-slot status, keypad, help.
#[derive(Debug)]
pub struct CalculatorUi<'a> {
    app: &'a CalculatorApp,
    keypad: Keypad,
}

impl<'a> CalculatorUi<'a> {
    /// Creates the screen widget over the app state.
    #[must_use]
    pub fn new(app: &'a CalculatorApp) -> Self {
        Self {
            app,
            keypad: Keypad::new(),
        }
    }

    fn columns(&self, area: Rect) -> Vec<Rect> {
        Layout::default()
            .direction(Direction::Horizontal)
            .margin(1)
            .constraints([
                Constraint::Min(30),    // history + display + status
                Constraint::Length(29), // keypad
                Constraint::Length(24), // help
            ])
            .split(area)
            .to_vec()
    }

    fn main_rows(&self, area: Rect) -> Vec<Rect> {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // history line
                Constraint::Length(3), // display
                Constraint::Min(3),    // status
            ])
            .split(area)
            .to_vec()
    }

    fn render_history(&self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Span::styled(
            self.app.history_line(),
            Style::default().fg(Color::Gray),
        ))
        .alignment(Alignment::Right)
        .block(
            Block::default()
                .title(" History ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .render(area, buf);
    }

    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Span::styled(
            self.app.display(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Right)
        .block(
            Block::default()
                .title(" Display ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .render(area, buf);
    }

    fn render_status(&self, area: Rect, buf: &mut Buffer) {
        let brain = self.app.brain();
        let mut lines = vec![Line::from(format!(
            "program: {} entries",
            brain.program().len()
        ))];
        if brain.is_partial_result() {
            lines.push(Line::from(Span::styled(
                "pending operation",
                Style::default().fg(Color::Yellow),
            )));
        }
        if self.app.has_saved_program() {
            lines.push(Line::from(Span::styled(
                "save slot in use",
                Style::default().fg(Color::Magenta),
            )));
        }
        Paragraph::new(lines)
            .block(
                Block::default()
                    .title(" Status ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .render(area, buf);
    }

    fn render_help(&self, area: Rect, buf: &mut Buffer) {
        let items: Vec<ListItem> = HELP_SHORTCUTS
            .iter()
            .map(|(key, desc)| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{key:>7}"), Style::default().fg(Color::Yellow)),
                    Span::raw(" "),
                    Span::styled(*desc, Style::default().fg(Color::Gray)),
                ]))
            })
            .collect();

        List::new(items)
            .block(
                Block::default()
                    .title(" Help ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .render(area, buf);
    }
}

impl Widget for CalculatorUi<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let columns = self.columns(area);
        let rows = self.main_rows(columns[0]);

        self.render_history(rows[0], buf);
        self.render_display(rows[1], buf);
        self.render_status(rows[2], buf);
        KeypadWidget::new(&self.keypad).render(columns[1], buf);
        self.render_help(columns[2], buf);
    }
}
