//! deskcalc - a single-window calculator with a replayable brain.
//!
//! The [`core`] module holds the arithmetic brain: an accumulator, a
//! pending-binary-operation slot, a human-readable trace, and an operation
//! log that can be captured and replayed. The [`tui`] module is the thin
//! view layer: digit typing, a keypad, and one saved-program slot.
//!
//! # Example
//!
//! ```rust
//! use deskcalc::core::Evaluator;
//!
//! let mut brain = Evaluator::new();
//! brain.set_operand(3.0);
//! brain.perform_operation("+");
//! brain.set_operand(4.0);
//! brain.perform_operation("×");
//! brain.set_operand(2.0);
//! brain.perform_operation("=");
//!
//! // Chains evaluate left to right, without operator precedence.
//! assert_eq!(brain.result(), 14.0);
//! assert_eq!(brain.description(), "(3+4)×2");
//!
//! // The recording replays to the same state.
//! let program = brain.program();
//! brain.clear();
//! brain.set_program(&program);
//! assert_eq!(brain.result(), 14.0);
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod tui;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::core::{format_value, Evaluator, OpKind, Program, ProgramEntry, Trace};
    pub use crate::tui::{ButtonAction, CalculatorApp, InputHandler, KeyAction, Keypad};
}
