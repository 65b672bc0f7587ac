//! The combining step of a reduction.
//!
//! `reduce` accepts either a two-argument block or a named binary operator
//! (`:+`, `"*"`). Both are folded into a [`Combinator`] before the first
//! element is visited.

use std::fmt;

use tracing::trace;

use crate::error::EnumError;
use crate::numeric::ArithOp;
use crate::value::{AtomType, Value};

/// A caller-supplied combining step: `(accumulator, element) -> accumulator`.
pub type Step<'a> = Box<dyn Fn(Value, &Value) -> Result<Value, EnumError> + 'a>;

// ============================================================================
// Operator - named binary operators
// ============================================================================

/// A named binary operator applied as `accumulator OP element`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operator(ArithOp);

impl Operator {
    pub const ADD: Operator = Operator(ArithOp::Add);
    pub const SUB: Operator = Operator(ArithOp::Sub);
    pub const MUL: Operator = Operator(ArithOp::Mul);
    pub const DIV: Operator = Operator(ArithOp::Div);
    pub const REM: Operator = Operator(ArithOp::Rem);
    pub const POW: Operator = Operator(ArithOp::Pow);

    /// Look up an operator by name. A leading `:` is ignored, so `"+"` and
    /// `":+"` name the same operator.
    pub fn from_name(name: &str) -> Result<Operator, EnumError> {
        let bare = name.strip_prefix(':').unwrap_or(name);
        let op = match bare {
            "+" => ArithOp::Add,
            "-" => ArithOp::Sub,
            "*" => ArithOp::Mul,
            "/" => ArithOp::Div,
            "%" => ArithOp::Rem,
            "**" => ArithOp::Pow,
            _ => return Err(EnumError::unknown_operator(name)),
        };
        Ok(Operator(op))
    }

    /// Look up an operator named by a symbol or string value.
    pub fn from_value(value: &Value) -> Result<Operator, EnumError> {
        match value {
            Value::Atom(AtomType::Symbol(s)) => s.with_name(Operator::from_name),
            Value::Atom(AtomType::String(s)) => Operator::from_name(s),
            other => Err(EnumError::unknown_operator(other.to_string())
                .with_suggestion("name the operator with a symbol such as :+")),
        }
    }

    pub fn name(self) -> &'static str {
        self.0.symbol()
    }

    /// `lhs OP rhs`. Numbers go through the numeric tower; `+` also joins
    /// strings and arrays, `*` also repeats them.
    pub fn apply(self, lhs: &Value, rhs: &Value) -> Result<Value, EnumError> {
        match (self.0, lhs, rhs) {
            (op, Value::Atom(AtomType::Number(a)), Value::Atom(AtomType::Number(b))) => a
                .combine(op, b)
                .map(Value::number)
                .map_err(EnumError::type_mismatch),
            (ArithOp::Add, Value::Atom(AtomType::String(a)), Value::Atom(AtomType::String(b))) => {
                Ok(Value::string(format!("{a}{b}")))
            }
            (ArithOp::Add, Value::Array(a), Value::Array(b)) => {
                let mut elements = a.elements.clone();
                elements.extend(b.elements.iter().cloned());
                Ok(Value::array(elements))
            }
            (ArithOp::Mul, Value::Atom(AtomType::String(s)), times) => {
                Ok(Value::string(s.repeat(repetitions(times, s.len())?)))
            }
            (ArithOp::Mul, Value::Array(a), times) => {
                let n = repetitions(times, a.elements.len())?;
                let mut elements = Vec::with_capacity(a.elements.len() * n);
                for _ in 0..n {
                    elements.extend(a.elements.iter().cloned());
                }
                Ok(Value::array(elements))
            }
            (op, lhs, rhs) => Err(EnumError::type_mismatch(format!(
                "cannot apply {} to {} and {}",
                op.symbol(),
                lhs.value_type(),
                rhs.value_type()
            ))
            .with_value(rhs)),
        }
    }
}

/// Longest string (bytes) or array (elements) `*` may build.
const MAX_REPEAT_LEN: usize = 1 << 28;

/// Repetition count for `unit * times`, bounded so the result stays below
/// [`MAX_REPEAT_LEN`]. An empty unit repeats zero times.
fn repetitions(times: &Value, unit_len: usize) -> Result<usize, EnumError> {
    let n = times
        .as_int()
        .and_then(|n| usize::try_from(n).ok())
        .ok_or_else(|| {
            EnumError::type_mismatch("repetition count must be a non-negative integer")
                .with_value(times)
        })?;
    if unit_len == 0 {
        return Ok(0);
    }
    match unit_len.checked_mul(n) {
        Some(total) if total <= MAX_REPEAT_LEN => Ok(n),
        _ => Err(EnumError::type_mismatch("repetition too large").with_value(times)),
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ":{}", self.name())
    }
}

// ============================================================================
// Combinator
// ============================================================================

pub enum Combinator<'a> {
    Function(Step<'a>),
    Operator(Operator),
}

impl<'a> Combinator<'a> {
    /// A fallible two-argument block.
    pub fn function(f: impl Fn(Value, &Value) -> Result<Value, EnumError> + 'a) -> Self {
        Combinator::Function(Box::new(f))
    }

    /// A two-argument block that cannot fail.
    pub fn block(f: impl Fn(Value, &Value) -> Value + 'a) -> Self {
        Combinator::Function(Box::new(
            move |acc: Value, element: &Value| -> Result<Value, EnumError> { Ok(f(acc, element)) },
        ))
    }

    pub fn operator(name: &str) -> Result<Self, EnumError> {
        Operator::from_name(name).map(Combinator::Operator)
    }

    /// Pick the combining step for a call: the block if there is one,
    /// otherwise the named operator.
    pub fn resolve(block: Option<Step<'a>>, symbol: Option<&Value>) -> Result<Self, EnumError> {
        let combinator = match (block, symbol) {
            (Some(step), _) => Combinator::Function(step),
            (None, Some(symbol)) => Combinator::Operator(Operator::from_value(symbol)?),
            (None, None) => return Err(EnumError::missing_combinator()),
        };
        trace!(?combinator, "resolved combining step");
        Ok(combinator)
    }

    pub fn apply(&self, acc: Value, element: &Value) -> Result<Value, EnumError> {
        match self {
            Combinator::Function(step) => step(acc, element),
            Combinator::Operator(op) => op.apply(&acc, element),
        }
    }
}

impl From<Operator> for Combinator<'_> {
    fn from(op: Operator) -> Self {
        Combinator::Operator(op)
    }
}

impl fmt::Debug for Combinator<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Combinator::Function(_) => write!(f, "Function(<block>)"),
            Combinator::Operator(op) => write!(f, "Operator({op})"),
        }
    }
}
