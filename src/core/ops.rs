//! Operator registry: what each calculator key does.

use std::f64::consts;

/// Every symbol the brain understands, in keypad order.
///
/// Useful for building the keypad and for exhaustive test strategies.
pub const SYMBOLS: [&str; 17] = [
    "π", "e", "±", "√", "∛", "x²", "x³", "x⁻¹", "cos", "sin", "exp", "log", "×", "÷", "+", "−",
    "=",
];

/// The behavior attached to an operator symbol.
///
/// Variants carry plain function pointers rather than boxed closures so the
/// kind stays `Copy` and comparable in tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OpKind {
    /// Replaces the accumulator with a fixed value (π, e).
    Constant(f64),
    /// Single-argument transform rendered before its argument: `√(9)`.
    UnaryPrefix(fn(f64) -> f64),
    /// Single-argument transform rendered after its argument: `(9)²`.
    UnaryPostfix(fn(f64) -> f64),
    /// Two-argument transform, deferred until the second operand arrives.
    Binary(fn(f64, f64) -> f64),
    /// Resolves the deferred binary operation.
    Equals,
}

/// Resolves a key symbol to its operation kind.
///
/// Unknown symbols resolve to `None`; the caller treats them as no-ops.
#[must_use]
pub fn lookup(symbol: &str) -> Option<OpKind> {
    let op = match symbol {
        "π" => OpKind::Constant(consts::PI),
        "e" => OpKind::Constant(consts::E),
        "±" => OpKind::UnaryPrefix(|x| -x),
        "√" => OpKind::UnaryPrefix(f64::sqrt),
        "∛" => OpKind::UnaryPrefix(f64::cbrt),
        "cos" => OpKind::UnaryPrefix(f64::cos),
        "sin" => OpKind::UnaryPrefix(f64::sin),
        "exp" => OpKind::UnaryPrefix(f64::exp),
        "log" => OpKind::UnaryPrefix(f64::ln),
        "x²" => OpKind::UnaryPostfix(|x| x * x),
        "x³" => OpKind::UnaryPostfix(|x| x * x * x),
        "x⁻¹" => OpKind::UnaryPostfix(reciprocal),
        "×" => OpKind::Binary(|a, b| a * b),
        "÷" => OpKind::Binary(|a, b| a / b),
        "+" => OpKind::Binary(|a, b| a + b),
        "−" => OpKind::Binary(|a, b| a - b),
        "=" => OpKind::Equals,
        _ => return None,
    };
    Some(op)
}

/// Reciprocal with the defined zero case: `1/0` is `0.0`, not infinity.
fn reciprocal(x: f64) -> f64 {
    if x == 0.0 {
        0.0
    } else {
        1.0 / x
    }
}
