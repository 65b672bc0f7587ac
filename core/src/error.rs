//! Error types for traversal operations.

use std::fmt;

use crate::value::Value;

/// Categories of traversal errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumErrorKind {
    /// `reduce` over an empty collection with no initial value
    EmptyReduction,
    /// The receiver cannot be iterated (not an array, range or hash)
    NotEnumerable,
    /// A named operator that `reduce` does not know
    UnknownOperator,
    /// `reduce` was given neither a block nor an operator
    MissingCombinator,
    /// Operands an operator cannot combine (e.g. `1 + "a"`)
    TypeMismatch,
    /// Malformed literal source
    Parse,
}

/// A traversal error with context.
#[derive(Debug, Clone)]
pub struct EnumError {
    /// The category of error
    pub kind: EnumErrorKind,
    /// Human-readable error message
    pub message: String,
    /// The value the error was raised on (if available)
    pub value: Option<String>,
    /// Suggestion for how to fix the call
    pub suggestion: Option<String>,
}

impl EnumError {
    pub fn new(kind: EnumErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            value: None,
            suggestion: None,
        }
    }

    /// Attach the offending value.
    pub fn with_value(mut self, value: &Value) -> Self {
        self.value = Some(format!("{value}"));
        self
    }

    /// Attach a suggestion for fixing the call.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    pub fn empty_reduction() -> Self {
        Self::new(
            EnumErrorKind::EmptyReduction,
            "undefined reduction: empty collection and no initial value",
        )
        .with_suggestion("pass an initial value")
    }

    pub fn not_enumerable(value: &Value) -> Self {
        Self::new(
            EnumErrorKind::NotEnumerable,
            format!("{} is not enumerable", value.value_type()),
        )
        .with_value(value)
    }

    pub fn unknown_operator(name: impl Into<String>) -> Self {
        Self::new(
            EnumErrorKind::UnknownOperator,
            format!("unknown operator: {}", name.into()),
        )
        .with_suggestion("use one of + - * / % **")
    }

    pub fn missing_combinator() -> Self {
        Self::new(
            EnumErrorKind::MissingCombinator,
            "reduce needs a block or an operator",
        )
    }

    pub fn type_mismatch(what: impl Into<String>) -> Self {
        Self::new(EnumErrorKind::TypeMismatch, what)
    }

    pub fn parse(what: impl Into<String>) -> Self {
        Self::new(EnumErrorKind::Parse, what)
    }
}

impl fmt::Display for EnumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(ref value) = self.value {
            // Keep messages on one line for long collections
            if value.chars().count() > 60 {
                let head: String = value.chars().take(57).collect();
                write!(f, " in: {head}...")?;
            } else {
                write!(f, " in: {value}")?;
            }
        }
        if let Some(ref suggestion) = self.suggestion {
            write!(f, " ({suggestion})")?;
        }
        Ok(())
    }
}

impl std::error::Error for EnumError {}

impl From<EnumError> for String {
    fn from(err: EnumError) -> String {
        err.to_string()
    }
}
