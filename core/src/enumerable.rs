//! Traversal operations over arrays, ranges and hashes.
//!
//! Every operation borrows its receiver and leaves it untouched. Receivers
//! that cannot be iterated fail with `EnumErrorKind::NotEnumerable`.

use tracing::debug;

use crate::combinator::{Combinator, Operator};
use crate::error::EnumError;
use crate::pattern::{Counter, Pattern};
use crate::seq::{self, seq};
use crate::value::Value;

// ============================================================================
// Iteration
// ============================================================================

/// Call `f` with each element in order; returns the receiver.
pub fn each<F>(collection: &Value, mut f: F) -> Result<Value, EnumError>
where
    F: FnMut(&Value),
{
    for element in seq(collection)? {
        f(&element);
    }
    Ok(collection.clone())
}

/// Call `f` with each element and its zero-based index; returns the receiver.
pub fn each_with_index<F>(collection: &Value, mut f: F) -> Result<Value, EnumError>
where
    F: FnMut(&Value, usize),
{
    for (index, element) in seq(collection)?.enumerate() {
        f(&element, index);
    }
    Ok(collection.clone())
}

// ============================================================================
// Filtering
// ============================================================================

/// The elements for which `predicate` holds, in their original order.
pub fn select<P>(collection: &Value, mut predicate: P) -> Result<Value, EnumError>
where
    P: FnMut(&Value) -> bool,
{
    let kept = seq(collection)?.filter(|element| predicate(element)).collect();
    Ok(Value::array(kept))
}

// ============================================================================
// Quantifiers
// ============================================================================

/// True when every element passes; true for an empty collection.
pub fn all(collection: &Value, pattern: &Pattern<'_>) -> Result<bool, EnumError> {
    Ok(seq(collection)?.all(|element| pattern.test(&element)))
}

/// True when some element passes; false for an empty collection.
pub fn any(collection: &Value, pattern: &Pattern<'_>) -> Result<bool, EnumError> {
    Ok(seq(collection)?.any(|element| pattern.test(&element)))
}

/// True when no element passes; true for an empty collection.
pub fn none(collection: &Value, pattern: &Pattern<'_>) -> Result<bool, EnumError> {
    any(collection, pattern).map(|found| !found)
}

// ============================================================================
// Counting
// ============================================================================

/// Number of elements the counter accepts; `Everything` uses the
/// collection's length without walking it.
pub fn count(collection: &Value, counter: &Counter<'_>) -> Result<usize, EnumError> {
    match counter {
        Counter::Everything => seq::len(collection),
        _ => Ok(seq(collection)?
            .filter(|element| counter.test(element))
            .count()),
    }
}

// ============================================================================
// Mapping
// ============================================================================

/// A new array holding `f(element)` for each element, in order.
pub fn map<F>(collection: &Value, f: F) -> Result<Value, EnumError>
where
    F: FnMut(&Value) -> Value,
{
    let mut f = f;
    let mapped = seq(collection)?.map(|element| f(&element)).collect();
    Ok(Value::array(mapped))
}

/// Like [`map`], with a fallible block. The first error stops the walk and
/// is returned; no partial array is built.
pub fn try_map<F>(collection: &Value, mut f: F) -> Result<Value, EnumError>
where
    F: FnMut(&Value) -> Result<Value, EnumError>,
{
    let mapped = seq(collection)?
        .map(|element| f(&element))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Value::array(mapped))
}

// ============================================================================
// Reduction
// ============================================================================

/// Left fold. Without `initial` the first element seeds the accumulator and
/// folding starts at the second; an empty collection then has no result.
pub fn reduce(
    collection: &Value,
    initial: Option<Value>,
    combinator: &Combinator<'_>,
) -> Result<Value, EnumError> {
    let mut elements = seq(collection)?;
    let seeded = initial.is_some();
    let seed = match initial {
        Some(seed) => seed,
        None => elements.next().ok_or_else(EnumError::empty_reduction)?,
    };
    debug!(%seed, seeded, ?combinator, "reducing");
    elements.try_fold(seed, |acc, element| combinator.apply(acc, &element))
}

/// Product of all elements, folded with a multiplying block.
pub fn multiply_els(collection: &Value) -> Result<Value, EnumError> {
    let times = Combinator::function(|acc, element| Operator::MUL.apply(&acc, element));
    reduce(collection, None, &times)
}
