//! Uniform iteration over enumerable values.
//!
//! Arrays yield their elements, ranges yield their expanded integers, and
//! hashes yield `[key, value]` pairs in insertion order. Every traversal
//! operation walks its receiver through [`seq`].

use std::ops::RangeInclusive;

use crate::error::EnumError;
use crate::value::Value;

// ============================================================================
// Seq - a borrowed cursor over an enumerable value
// ============================================================================

/// A cursor over the elements of an enumerable value.
#[derive(Clone, Debug)]
pub enum Seq<'a> {
    /// Array elements, in index order
    Array(std::slice::Iter<'a, Value>),
    /// Range integers, ascending
    Range(RangeInclusive<i64>),
    /// Hash entries as two-element arrays, in insertion order
    Hash(indexmap::map::Iter<'a, Value, Value>),
}

impl Iterator for Seq<'_> {
    type Item = Value;

    fn next(&mut self) -> Option<Value> {
        match self {
            Seq::Array(iter) => iter.next().cloned(),
            Seq::Range(iter) => iter.next().map(Value::int),
            Seq::Hash(iter) => iter
                .next()
                .map(|(k, v)| Value::array(vec![k.clone(), v.clone()])),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Seq::Array(iter) => iter.size_hint(),
            Seq::Range(iter) => iter.size_hint(),
            Seq::Hash(iter) => iter.size_hint(),
        }
    }
}

/// Open a cursor over `value`.
///
/// Fails with `NotEnumerable` for atoms, nil, regexes and type objects.
pub fn seq(value: &Value) -> Result<Seq<'_>, EnumError> {
    match value {
        Value::Array(arr) => Ok(Seq::Array(arr.elements.iter())),
        Value::Range(r) => Ok(Seq::Range(r.iter())),
        Value::Hash(map) => Ok(Seq::Hash(map.entries.iter())),
        other => Err(EnumError::not_enumerable(other)),
    }
}

/// Element count without walking the collection. Range lengths saturate
/// at `usize::MAX`.
pub fn len(value: &Value) -> Result<usize, EnumError> {
    match value {
        Value::Array(arr) => Ok(arr.elements.len()),
        Value::Range(r) => Ok(r.len()),
        Value::Hash(map) => Ok(map.entries.len()),
        other => Err(EnumError::not_enumerable(other)),
    }
}
