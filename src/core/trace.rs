//! The running human-readable description of a computation.
//!
//! The trace is what the history label shows: `(3+4)×2`, `√(9)`, `3+(9)²`.
//! It grows alongside the accumulator and is rebuilt identically when a
//! recorded program is replayed.

/// Rendered form of the empty trace. A single space keeps the history label
/// from collapsing in the UI.
pub const BLANK: &str = " ";

/// Builds the textual trace of the operations applied so far.
///
/// Besides the text itself, the trace holds at most one *remembered operand*:
/// the operand typed after a binary operator, kept aside so a following unary
/// operator can wrap just that value (`3+√(9)` rather than `√(3+9)`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace {
    text: String,
    argument: Option<String>,
}

impl Default for Trace {
    fn default() -> Self {
        Self::new()
    }
}

impl Trace {
    /// Creates a blank trace.
    #[must_use]
    pub fn new() -> Self {
        Self {
            text: BLANK.to_string(),
            argument: None,
        }
    }

    /// The trace text. Blank traces read as a single space.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// True if nothing has been recorded since the last clear.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.text == BLANK
    }

    /// True if an operand is being held for the next unary wrap.
    #[must_use]
    pub fn has_argument(&self) -> bool {
        self.argument.is_some()
    }

    /// Appends a rendered operand to the text.
    pub fn push_operand(&mut self, rendered: &str) {
        self.normalize_blank();
        self.text.push_str(rendered);
    }

    /// Holds a rendered operand for the next unary operator to wrap.
    pub fn remember_operand(&mut self, rendered: String) {
        self.argument = Some(rendered);
    }

    /// Folds the held operand, if any, into the text verbatim.
    pub fn flush_argument(&mut self) {
        if let Some(arg) = self.argument.take() {
            self.normalize_blank();
            self.text.push_str(&arg);
        }
    }

    /// Records an operator symbol.
    ///
    /// With a held operand, the symbol wraps it: `sym(arg)` when `as_prefix`,
    /// `(arg)sym` otherwise. Without one, a prefix symbol wraps the whole
    /// running text and anything else is appended.
    pub fn push_symbol(&mut self, symbol: &str, as_prefix: bool) {
        self.normalize_blank();
        let symbol = strip_glyph_placeholder(symbol);
        match (self.argument.take(), as_prefix) {
            (Some(arg), true) => {
                self.text.push_str(symbol);
                self.text.push('(');
                self.text.push_str(&arg);
                self.text.push(')');
            }
            (Some(arg), false) => {
                self.text.push('(');
                self.text.push_str(&arg);
                self.text.push(')');
                self.text.push_str(symbol);
            }
            (None, true) => {
                self.text = format!("{symbol}({})", self.text);
            }
            (None, false) => {
                self.text.push_str(symbol);
            }
        }
    }

    /// Wraps the whole text in parentheses.
    ///
    /// Used to bracket the left side when a binary operator lands on an
    /// already-partial computation.
    pub fn bracket(&mut self) {
        self.normalize_blank();
        self.text = format!("({})", self.text);
    }

    /// Returns the trace to the blank state and drops any held operand.
    pub fn clear(&mut self) {
        self.text.clear();
        self.text.push_str(BLANK);
        self.argument = None;
    }

    fn normalize_blank(&mut self) {
        if self.text == BLANK {
            self.text.clear();
        }
    }
}

/// Strips the placeholder `x` from display glyphs: `x²` renders as `²`.
///
/// Only the leading placeholder is stripped; function names such as `exp`
/// keep their spelling.
fn strip_glyph_placeholder(symbol: &str) -> &str {
    match symbol {
        "x²" | "x³" | "x⁻¹" => &symbol[1..],
        _ => symbol,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== Blank state =====

    #[test]
    fn test_new_is_blank_single_space() {
        let trace = Trace::new();
        assert_eq!(trace.text(), " ");
        assert!(trace.is_blank());
        assert!(!trace.has_argument());
    }

    #[test]
    fn test_first_operand_replaces_blank() {
        let mut trace = Trace::new();
        trace.push_operand("7");
        assert_eq!(trace.text(), "7");
    }

    // ===== Symbol placement =====

    #[test]
    fn test_plain_append() {
        let mut trace = Trace::new();
        trace.push_operand("3");
        trace.push_symbol("+", false);
        assert_eq!(trace.text(), "3+");
    }

    #[test]
    fn test_prefix_wraps_whole_text_without_argument() {
        let mut trace = Trace::new();
        trace.push_operand("9");
        trace.push_symbol("√", true);
        assert_eq!(trace.text(), "√(9)");
    }

    #[test]
    fn test_prefix_wraps_held_argument() {
        let mut trace = Trace::new();
        trace.push_operand("3");
        trace.push_symbol("+", false);
        trace.remember_operand("9".to_string());
        trace.push_symbol("√", true);
        assert_eq!(trace.text(), "3+√(9)");
        assert!(!trace.has_argument());
    }

    #[test]
    fn test_postfix_wraps_held_argument() {
        let mut trace = Trace::new();
        trace.push_operand("3");
        trace.push_symbol("+", false);
        trace.remember_operand("9".to_string());
        trace.push_symbol("x²", false);
        assert_eq!(trace.text(), "3+(9)²");
    }

    #[test]
    fn test_postfix_appends_without_argument() {
        let mut trace = Trace::new();
        trace.push_operand("9");
        trace.push_symbol("x²", false);
        assert_eq!(trace.text(), "9²");
    }

    // ===== Glyph stripping =====

    #[test]
    fn test_glyph_placeholder_stripped() {
        assert_eq!(strip_glyph_placeholder("x²"), "²");
        assert_eq!(strip_glyph_placeholder("x³"), "³");
        assert_eq!(strip_glyph_placeholder("x⁻¹"), "⁻¹");
    }

    #[test]
    fn test_function_names_keep_their_spelling() {
        assert_eq!(strip_glyph_placeholder("exp"), "exp");
        assert_eq!(strip_glyph_placeholder("×"), "×");
    }

    #[test]
    fn test_exp_wrap_keeps_spelling() {
        let mut trace = Trace::new();
        trace.push_operand("3");
        trace.push_symbol("+", false);
        trace.remember_operand("4".to_string());
        trace.push_symbol("exp", true);
        assert_eq!(trace.text(), "3+exp(4)");
    }

    // ===== Bracketing and flushing =====

    #[test]
    fn test_flush_argument_appends_verbatim() {
        let mut trace = Trace::new();
        trace.push_operand("3");
        trace.push_symbol("+", false);
        trace.remember_operand("4".to_string());
        trace.flush_argument();
        assert_eq!(trace.text(), "3+4");
    }

    #[test]
    fn test_flush_without_argument_is_noop() {
        let mut trace = Trace::new();
        trace.push_operand("3");
        trace.flush_argument();
        assert_eq!(trace.text(), "3");
    }

    #[test]
    fn test_bracket_wraps_whole_text() {
        let mut trace = Trace::new();
        trace.push_operand("3");
        trace.push_symbol("+", false);
        trace.push_operand("4");
        trace.bracket();
        assert_eq!(trace.text(), "(3+4)");
    }

    // ===== Clear =====

    #[test]
    fn test_clear_returns_to_blank_and_drops_argument() {
        let mut trace = Trace::new();
        trace.push_operand("3");
        trace.remember_operand("4".to_string());
        trace.clear();
        assert_eq!(trace.text(), " ");
        assert!(trace.is_blank());
        assert!(!trace.has_argument());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut trace = Trace::new();
        trace.push_operand("3");
        trace.clear();
        let once = trace.clone();
        trace.clear();
        assert_eq!(trace, once);
    }
}
