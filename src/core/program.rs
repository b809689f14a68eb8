//! The replayable operation log.
//!
//! Every operand entered and every key pressed is appended here in order.
//! Capturing the log and replaying it through the brain's entry points
//! reconstructs the accumulator, the description, and the pending state
//! exactly as live entry produced them.

use serde::{Deserialize, Serialize};

/// One recorded step: a typed-in operand or a pressed operator key.
///
/// Serialized untagged, so a program is the original heterogeneous sequence:
/// `[3.0, "+", 4.0, "="]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProgramEntry {
    /// A numeric operand.
    Operand(f64),
    /// An operator symbol, recognized or not.
    Symbol(String),
}

/// An ordered, replayable sequence of operands and operator symbols.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Program(Vec<ProgramEntry>);

impl Program {
    /// Creates an empty program.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry.
    pub fn push(&mut self, entry: ProgramEntry) {
        self.0.push(entry);
    }

    /// The recorded entries in order.
    #[must_use]
    pub fn entries(&self) -> &[ProgramEntry] {
        &self.0
    }

    /// Number of recorded entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Drops all entries.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Iterates over the entries in order.
    pub fn iter(&self) -> impl Iterator<Item = &ProgramEntry> {
        self.0.iter()
    }

    /// Serializes the program to its JSON wire form.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserializes a program from JSON.
    ///
    /// Lenient at the element level: array elements that are neither a number
    /// nor a string are skipped. Input that is not a JSON array at all is the
    /// caller's error.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let values: Vec<serde_json::Value> = serde_json::from_str(json)?;
        let mut program = Self::new();
        for value in values {
            match value {
                serde_json::Value::Number(n) => match n.as_f64() {
                    Some(operand) => program.push(ProgramEntry::Operand(operand)),
                    None => tracing::debug!(%n, "skipping unrepresentable operand"),
                },
                serde_json::Value::String(symbol) => program.push(ProgramEntry::Symbol(symbol)),
                other => tracing::debug!(?other, "skipping malformed program entry"),
            }
        }
        Ok(program)
    }
}

impl FromIterator<ProgramEntry> for Program {
    fn from_iter<I: IntoIterator<Item = ProgramEntry>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a ProgramEntry;
    type IntoIter = std::slice::Iter<'a, ProgramEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
