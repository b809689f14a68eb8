//! The calculator brain.
//!
//! A small state machine: an accumulator, an optional deferred binary
//! operation, the running [`Trace`], and the replayable [`Program`] log.
//! Chained binary operations evaluate left to right with no precedence —
//! `3 + 4 × 2 =` is `(3+4)×2 = 14`.
//!
//! Nothing here can fail. Unknown symbols are recorded and otherwise
//! ignored, and the numeric edge cases are defined values (`x⁻¹` of zero is
//! `0.0`), so the whole surface is infallible by design.

use crate::core::format_value;
use crate::core::ops::{self, OpKind};
use crate::core::program::{Program, ProgramEntry};
use crate::core::trace::Trace;

/// A binary operation waiting for its second operand.
#[derive(Debug, Clone, Copy, PartialEq)]
struct PendingBinary {
    function: fn(f64, f64) -> f64,
    first_operand: f64,
}

/// Evaluates operand/operator sequences and keeps a replayable record.
#[derive(Debug, Default)]
pub struct Evaluator {
    accumulator: f64,
    pending: Option<PendingBinary>,
    program: Program,
    trace: Trace,
}

impl Evaluator {
    /// Creates a cleared brain: accumulator 0, blank trace, empty log.
    #[must_use]
    pub fn new() -> Self {
        Self {
            accumulator: 0.0,
            pending: None,
            program: Program::new(),
            trace: Trace::new(),
        }
    }

    /// The current value.
    #[must_use]
    pub fn result(&self) -> f64 {
        self.accumulator
    }

    /// True while a binary operation is waiting for its second operand.
    #[must_use]
    pub fn is_partial_result(&self) -> bool {
        self.pending.is_some()
    }

    /// The human-readable trace of the computation so far.
    ///
    /// Blank traces read as a single space so the history label keeps its
    /// height.
    #[must_use]
    pub fn description(&self) -> &str {
        self.trace.text()
    }

    /// Enters an operand.
    ///
    /// With a binary operation pending, the operand is remembered for the
    /// next unary wrap instead of being appended to the trace immediately.
    pub fn set_operand(&mut self, value: f64) {
        self.accumulator = value;
        self.program.push(ProgramEntry::Operand(value));
        let rendered = format_value(value);
        if self.is_partial_result() {
            self.trace.remember_operand(rendered);
        } else {
            self.trace.push_operand(&rendered);
        }
    }

    /// Applies the operation behind a key symbol.
    ///
    /// The symbol is always recorded in the program log. Unknown symbols
    /// change nothing else; that leniency is part of the contract.
    pub fn perform_operation(&mut self, symbol: &str) {
        self.program.push(ProgramEntry::Symbol(symbol.to_string()));
        let Some(op) = ops::lookup(symbol) else {
            tracing::debug!(symbol, "ignoring unknown operation symbol");
            return;
        };
        match op {
            OpKind::Constant(value) => {
                self.accumulator = value;
                self.trace.push_symbol(symbol, false);
            }
            OpKind::UnaryPrefix(function) => {
                self.trace.push_symbol(symbol, true);
                self.accumulator = function(self.accumulator);
            }
            OpKind::UnaryPostfix(function) => {
                self.accumulator = function(self.accumulator);
                self.trace.push_symbol(symbol, false);
            }
            OpKind::Binary(function) => {
                if self.is_partial_result() {
                    // Fold the held operand in and bracket the finished left
                    // side before chaining: 3 + 4 × ... reads (3+4)×.
                    self.trace.flush_argument();
                    self.trace.bracket();
                    self.resolve_pending();
                }
                self.pending = Some(PendingBinary {
                    function,
                    first_operand: self.accumulator,
                });
                self.trace.push_symbol(symbol, false);
            }
            OpKind::Equals => {
                if self.is_partial_result() {
                    self.trace.flush_argument();
                    self.resolve_pending();
                }
            }
        }
    }

    fn resolve_pending(&mut self) {
        if let Some(pending) = self.pending.take() {
            self.accumulator = (pending.function)(pending.first_operand, self.accumulator);
        }
    }

    /// Resets everything: accumulator, pending slot, trace, and log.
    pub fn clear(&mut self) {
        self.accumulator = 0.0;
        self.pending = None;
        self.program.clear();
        self.trace.clear();
    }

    /// A copy of the operation log recorded so far.
    #[must_use]
    pub fn program(&self) -> Program {
        self.program.clone()
    }

    /// Clears the brain and replays a recorded program.
    ///
    /// Replay goes through the same entry points as live input, so the
    /// accumulator, trace, and pending state come out identical to the
    /// sequence that produced the recording.
    pub fn set_program(&mut self, program: &Program) {
        self.clear();
        for entry in program {
            match entry {
                ProgramEntry::Operand(value) => self.set_operand(*value),
                ProgramEntry::Symbol(symbol) => self.perform_operation(symbol),
            }
        }
    }
}
