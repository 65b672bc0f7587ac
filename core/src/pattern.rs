//! Element tests for the quantifiers and `count`.
//!
//! A caller may test elements with a block, a regex, a type, a plain value,
//! or nothing at all. The choice is made once per call by
//! [`Pattern::resolve`] / [`Counter::resolve`]; the traversal then only
//! asks [`Pattern::test`].

use std::fmt;
use std::sync::Arc;

use regex::Regex;
use tracing::trace;

use crate::value::{Value, ValueType};

/// A caller-supplied element test.
pub type Predicate<'a> = Box<dyn Fn(&Value) -> bool + 'a>;

// ============================================================================
// Pattern - all? / any? / none?
// ============================================================================

pub enum Pattern<'a> {
    /// Block: true when the block returns true
    Predicate(Predicate<'a>),
    /// Regex: true when it matches the element's string form
    Matches(Arc<Regex>),
    /// Type: true when the element is a member of the type
    KindOf(ValueType),
    /// Any other value: true when the element equals it
    Equals(Value),
    /// No argument: true when the element is truthy
    Truthy,
}

impl<'a> Pattern<'a> {
    pub fn predicate(f: impl Fn(&Value) -> bool + 'a) -> Self {
        Pattern::Predicate(Box::new(f))
    }

    /// Pick the test for a call. A block beats an argument; a regex or
    /// type argument tests by match or membership; any other argument
    /// tests by equality; with neither, elements are tested for truthiness.
    pub fn resolve(arg: Option<Value>, block: Option<Predicate<'a>>) -> Self {
        let pattern = match (block, arg) {
            (Some(block), _) => Pattern::Predicate(block),
            (None, Some(Value::Regexp(re))) => Pattern::Matches(re),
            (None, Some(Value::Type(ty))) => Pattern::KindOf(ty),
            (None, Some(other)) => Pattern::Equals(other),
            (None, None) => Pattern::Truthy,
        };
        trace!(?pattern, "resolved element test");
        pattern
    }

    pub fn test(&self, element: &Value) -> bool {
        match self {
            Pattern::Predicate(f) => f(element),
            Pattern::Matches(re) => re.is_match(&element.to_match_string()),
            Pattern::KindOf(ty) => element.is_a(*ty),
            Pattern::Equals(value) => element == value,
            Pattern::Truthy => element.is_truthy(),
        }
    }
}

impl From<Value> for Pattern<'_> {
    fn from(arg: Value) -> Self {
        Pattern::resolve(Some(arg), None)
    }
}

impl From<ValueType> for Pattern<'_> {
    fn from(ty: ValueType) -> Self {
        Pattern::KindOf(ty)
    }
}

impl fmt::Debug for Pattern<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Predicate(_) => write!(f, "Predicate(<block>)"),
            Pattern::Matches(re) => write!(f, "Matches(/{}/)", re.as_str()),
            Pattern::KindOf(ty) => write!(f, "KindOf({ty})"),
            Pattern::Equals(value) => write!(f, "Equals({value})"),
            Pattern::Truthy => write!(f, "Truthy"),
        }
    }
}

// ============================================================================
// Counter - count
// ============================================================================

/// What `count` counts. Unlike [`Pattern`], an argument is always compared
/// by equality.
pub enum Counter<'a> {
    Everything,
    Equals(Value),
    Predicate(Predicate<'a>),
}

impl<'a> Counter<'a> {
    pub fn predicate(f: impl Fn(&Value) -> bool + 'a) -> Self {
        Counter::Predicate(Box::new(f))
    }

    /// A block beats an argument; with neither, every element counts.
    pub fn resolve(arg: Option<Value>, block: Option<Predicate<'a>>) -> Self {
        match (block, arg) {
            (Some(block), _) => Counter::Predicate(block),
            (None, Some(value)) => Counter::Equals(value),
            (None, None) => Counter::Everything,
        }
    }

    pub fn test(&self, element: &Value) -> bool {
        match self {
            Counter::Everything => true,
            Counter::Equals(value) => element == value,
            Counter::Predicate(f) => f(element),
        }
    }
}

impl From<Value> for Counter<'_> {
    fn from(arg: Value) -> Self {
        Counter::Equals(arg)
    }
}

impl fmt::Debug for Counter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Counter::Everything => write!(f, "Everything"),
            Counter::Equals(value) => write!(f, "Equals({value})"),
            Counter::Predicate(_) => write!(f, "Predicate(<block>)"),
        }
    }
}
