//! Traversal primitives over dynamic collections.
//!
//! Arrays, integer ranges and insertion-ordered hashes of [`Value`]s can be
//! walked with `each`, filtered with `select`, tested with `all`/`any`/`none`,
//! counted, mapped and reduced. Element tests accept a block, a regex, a type
//! or a plain value ([`Pattern`]); reductions accept a block or a named
//! operator ([`Combinator`]).
//!
//! ```
//! use enumerable::{Operator, Value, reduce};
//!
//! let sum = reduce(&Value::range(5, 10), None, &Operator::ADD.into()).unwrap();
//! assert_eq!(sum, Value::int(45));
//! ```

pub mod combinator;
pub mod enumerable;
pub mod error;
pub mod interner;
pub mod numeric;
pub mod pattern;
pub mod reader;
pub mod seq;
pub mod value;

pub use combinator::{Combinator, Operator, Step};
pub use enumerable::{
    all, any, count, each, each_with_index, map, multiply_els, none, reduce, select, try_map,
};
pub use error::{EnumError, EnumErrorKind};
pub use interner::Symbol;
pub use numeric::{ArithOp, NumericType};
pub use pattern::{Counter, Pattern, Predicate};
pub use reader::read;
pub use seq::{Seq, seq};
pub use value::{AtomType, Value, ValueType};
