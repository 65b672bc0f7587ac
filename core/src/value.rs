use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::RangeInclusive;
use std::sync::Arc;

use indexmap::IndexMap;
use regex::Regex;
use rustc_hash::FxBuildHasher;

use crate::error::EnumError;
use crate::interner::Symbol;
use crate::numeric::NumericType;

// ============================================================================
// Core Type System
// ============================================================================

#[derive(Debug, Clone)]
pub enum AtomType {
    Symbol(Symbol),
    Number(NumericType),
    String(String),
    Bool(bool),
}

// Implement PartialEq manually to handle NumericType comparison
impl PartialEq for AtomType {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (AtomType::Symbol(a), AtomType::Symbol(b)) => a == b,
            (AtomType::Number(a), AtomType::Number(b)) => a == b,
            (AtomType::String(a), AtomType::String(b)) => a == b,
            (AtomType::Bool(a), AtomType::Bool(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for AtomType {}

impl Hash for AtomType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            AtomType::Symbol(s) => s.hash(state),
            AtomType::Number(n) => n.hash(state),
            AtomType::String(s) => s.hash(state),
            AtomType::Bool(b) => b.hash(state),
        }
    }
}

/// Keyed collection storage: insertion ordered, Fx hashed.
pub type Entries = IndexMap<Value, Value, FxBuildHasher>;

#[derive(Clone, Debug, PartialEq)]
pub struct ArrayValue {
    pub elements: Vec<Value>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HashValue {
    pub entries: Entries,
}

/// An integer range. `exclusive` ranges (`1...4`) omit their end.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RangeValue {
    pub start: i64,
    pub end: i64,
    pub exclusive: bool,
}

impl RangeValue {
    pub fn new(start: i64, end: i64, exclusive: bool) -> Self {
        RangeValue {
            start,
            end,
            exclusive,
        }
    }

    /// Number of integers the range expands to. Only the full
    /// `i64::MIN..=i64::MAX` span exceeds `usize::MAX` on 64-bit targets;
    /// it saturates to `usize::MAX`.
    pub fn len(&self) -> usize {
        let span = i128::from(self.end) - i128::from(self.start);
        let span = if self.exclusive { span } else { span + 1 };
        usize::try_from(span.max(0)).unwrap_or(usize::MAX)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The expanded integers, in ascending order.
    pub fn iter(&self) -> RangeInclusive<i64> {
        let last = if self.exclusive {
            self.end.checked_sub(1)
        } else {
            Some(self.end)
        };
        match last {
            Some(last) => self.start..=last,
            // An exclusive range ending at i64::MIN is empty
            None => 1..=0,
        }
    }
}

/// The class of a value, as named by type patterns (`Numeric`, `Float`, ...).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueType {
    Object,
    Numeric,
    Integer,
    Float,
    Rational,
    Complex,
    String,
    Symbol,
    TrueClass,
    FalseClass,
    NilClass,
    Array,
    Hash,
    Range,
    Regexp,
    Class,
}

impl ValueType {
    pub const ALL: [ValueType; 16] = [
        ValueType::Object,
        ValueType::Numeric,
        ValueType::Integer,
        ValueType::Float,
        ValueType::Rational,
        ValueType::Complex,
        ValueType::String,
        ValueType::Symbol,
        ValueType::TrueClass,
        ValueType::FalseClass,
        ValueType::NilClass,
        ValueType::Array,
        ValueType::Hash,
        ValueType::Range,
        ValueType::Regexp,
        ValueType::Class,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ValueType::Object => "Object",
            ValueType::Numeric => "Numeric",
            ValueType::Integer => "Integer",
            ValueType::Float => "Float",
            ValueType::Rational => "Rational",
            ValueType::Complex => "Complex",
            ValueType::String => "String",
            ValueType::Symbol => "Symbol",
            ValueType::TrueClass => "TrueClass",
            ValueType::FalseClass => "FalseClass",
            ValueType::NilClass => "NilClass",
            ValueType::Array => "Array",
            ValueType::Hash => "Hash",
            ValueType::Range => "Range",
            ValueType::Regexp => "Regexp",
            ValueType::Class => "Class",
        }
    }

    pub fn from_name(name: &str) -> Option<ValueType> {
        ValueType::ALL.into_iter().find(|ty| ty.name() == name)
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug)]
pub enum Value {
    Atom(AtomType),
    Nil,
    Array(Arc<ArrayValue>),
    Hash(Arc<HashValue>),
    Range(RangeValue),
    Regexp(Arc<Regex>),
    Type(ValueType),
}

// Regex has no structural equality; two patterns are equal when their
// sources are.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Atom(a), Value::Atom(b)) => a == b,
            (Value::Nil, Value::Nil) => true,
            (Value::Array(a), Value::Array(b)) => Arc::ptr_eq(a, b) || a == b,
            (Value::Hash(a), Value::Hash(b)) => Arc::ptr_eq(a, b) || a == b,
            (Value::Range(a), Value::Range(b)) => a == b,
            (Value::Regexp(a), Value::Regexp(b)) => a.as_str() == b.as_str(),
            (Value::Type(a), Value::Type(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Value::Atom(atom) => atom.hash(state),
            Value::Nil => {}
            Value::Array(arr) => arr.elements.hash(state),
            // Hash equality ignores entry order, so only the size is hashed
            Value::Hash(map) => map.entries.len().hash(state),
            Value::Range(r) => r.hash(state),
            Value::Regexp(re) => re.as_str().hash(state),
            Value::Type(ty) => ty.hash(state),
        }
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

fn escape_string(s: &str) -> String {
    let mut result = String::new();
    for c in s.chars() {
        match c {
            '\n' => result.push_str("\\n"),
            '\t' => result.push_str("\\t"),
            '\r' => result.push_str("\\r"),
            '\\' => result.push_str("\\\\"),
            '"' => result.push_str("\\\""),
            c => result.push(c),
        }
    }
    result
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Atom(AtomType::Symbol(s)) => write!(f, "{s}"),
            Value::Atom(AtomType::Number(n)) => write!(f, "{n}"),
            Value::Atom(AtomType::String(s)) => write!(f, "\"{}\"", escape_string(s)),
            Value::Atom(AtomType::Bool(b)) => write!(f, "{b}"),
            Value::Nil => write!(f, "nil"),
            Value::Array(arr) => {
                write!(f, "[")?;
                for (i, elem) in arr.elements.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{elem}")?;
                }
                write!(f, "]")
            }
            Value::Hash(map) => {
                if map.entries.is_empty() {
                    return write!(f, "{{}}");
                }
                write!(f, "{{")?;
                for (i, (key, val)) in map.entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key} => {val}")?;
                }
                write!(f, "}}")
            }
            Value::Range(r) => {
                let dots = if r.exclusive { "..." } else { ".." };
                write!(f, "{}{dots}{}", r.start, r.end)
            }
            Value::Regexp(re) => write!(f, "/{}/", re.as_str()),
            Value::Type(ty) => write!(f, "{ty}"),
        }
    }
}

// ============================================================================
// Constructors
// ============================================================================

impl Value {
    pub fn int(n: i64) -> Value {
        Value::Atom(AtomType::Number(NumericType::Int(n)))
    }

    pub fn float(x: f64) -> Value {
        Value::Atom(AtomType::Number(NumericType::Float(x)))
    }

    pub fn ratio(num: i64, denom: i64) -> Result<Value, EnumError> {
        NumericType::make_ratio(num, denom)
            .map(Value::number)
            .map_err(EnumError::type_mismatch)
    }

    pub fn complex(re: f64, im: f64) -> Value {
        Value::Atom(AtomType::Number(NumericType::Complex(re, im)))
    }

    pub fn number(n: NumericType) -> Value {
        Value::Atom(AtomType::Number(n))
    }

    pub fn string(s: impl Into<String>) -> Value {
        Value::Atom(AtomType::String(s.into()))
    }

    pub fn symbol(name: &str) -> Value {
        Value::Atom(AtomType::Symbol(Symbol::intern(name)))
    }

    pub fn bool(b: bool) -> Value {
        Value::Atom(AtomType::Bool(b))
    }

    pub fn array(elements: Vec<Value>) -> Value {
        Value::Array(Arc::new(ArrayValue { elements }))
    }

    /// Words as an array of strings, like `%w[ant bear cat]`.
    pub fn words(words: &[&str]) -> Value {
        Value::array(words.iter().map(|w| Value::string(*w)).collect())
    }

    /// A keyed collection; later duplicates of a key overwrite earlier ones
    /// but keep the first insertion position.
    pub fn hash_map(pairs: Vec<(Value, Value)>) -> Value {
        let mut entries = Entries::default();
        for (k, v) in pairs {
            entries.insert(k, v);
        }
        Value::Hash(Arc::new(HashValue { entries }))
    }

    /// Inclusive range `start..end`.
    pub fn range(start: i64, end: i64) -> Value {
        Value::Range(RangeValue::new(start, end, false))
    }

    /// Exclusive range `start...end`.
    pub fn exclusive_range(start: i64, end: i64) -> Value {
        Value::Range(RangeValue::new(start, end, true))
    }

    pub fn regex(source: &str) -> Result<Value, EnumError> {
        Regex::new(source)
            .map(|re| Value::Regexp(Arc::new(re)))
            .map_err(|e| EnumError::parse(format!("invalid regex /{source}/: {e}")))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Value {
        Value::int(n)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Value {
        Value::float(x)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Value {
        Value::bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Value {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Value {
        Value::string(s)
    }
}

impl From<NumericType> for Value {
    fn from(n: NumericType) -> Value {
        Value::number(n)
    }
}

impl From<ValueType> for Value {
    fn from(ty: ValueType) -> Value {
        Value::Type(ty)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Value {
        Value::array(items.into_iter().map(Into::into).collect())
    }
}

// ============================================================================
// Element Methods
// ============================================================================

impl Value {
    /// `false` and `nil` are falsy; everything else is truthy.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Nil | Value::Atom(AtomType::Bool(false)))
    }

    pub fn as_number(&self) -> Option<&NumericType> {
        match self {
            Value::Atom(AtomType::Number(n)) => Some(n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Atom(AtomType::String(s)) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Atom(AtomType::Number(NumericType::Int(n))) => Some(*n),
            _ => None,
        }
    }

    /// Even integers; false for everything else.
    pub fn is_even(&self) -> bool {
        self.as_number().and_then(NumericType::is_even) == Some(true)
    }

    /// Odd integers; false for everything else.
    pub fn is_odd(&self) -> bool {
        self.as_number().and_then(NumericType::is_even) == Some(false)
    }

    /// Character count of a string, element count of a collection.
    pub fn length(&self) -> Option<usize> {
        match self {
            Value::Atom(AtomType::String(s)) => Some(s.chars().count()),
            Value::Atom(AtomType::Symbol(s)) => Some(s.with_name(|n| n.chars().count())),
            Value::Array(arr) => Some(arr.elements.len()),
            Value::Hash(map) => Some(map.entries.len()),
            Value::Range(r) => Some(r.len()),
            _ => None,
        }
    }

    /// Text a regex pattern is matched against: the raw content of strings,
    /// the name of symbols, the display form of everything else.
    pub fn to_match_string(&self) -> Cow<'_, str> {
        match self {
            Value::Atom(AtomType::String(s)) => Cow::Borrowed(s.as_str()),
            Value::Atom(AtomType::Symbol(s)) => Cow::Owned(s.name()),
            other => Cow::Owned(other.to_string()),
        }
    }

    /// The concrete class of this value.
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Atom(AtomType::Number(n)) => match n {
                NumericType::Int(_) | NumericType::BigInt(_) => ValueType::Integer,
                NumericType::Ratio(..) | NumericType::BigRatio(_) => ValueType::Rational,
                NumericType::Float(_) => ValueType::Float,
                NumericType::Complex(..) => ValueType::Complex,
            },
            Value::Atom(AtomType::String(_)) => ValueType::String,
            Value::Atom(AtomType::Symbol(_)) => ValueType::Symbol,
            Value::Atom(AtomType::Bool(true)) => ValueType::TrueClass,
            Value::Atom(AtomType::Bool(false)) => ValueType::FalseClass,
            Value::Nil => ValueType::NilClass,
            Value::Array(_) => ValueType::Array,
            Value::Hash(_) => ValueType::Hash,
            Value::Range(_) => ValueType::Range,
            Value::Regexp(_) => ValueType::Regexp,
            Value::Type(_) => ValueType::Class,
        }
    }

    /// Type membership. Every number is `Numeric`, every value is an
    /// `Object`; otherwise only the concrete class matches.
    pub fn is_a(&self, ty: ValueType) -> bool {
        match ty {
            ValueType::Object => true,
            ValueType::Numeric => matches!(self, Value::Atom(AtomType::Number(_))),
            concrete => self.value_type() == concrete,
        }
    }
}
