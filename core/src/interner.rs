//! Process-wide symbol table.
//!
//! Symbols (`:even?`, `:+`) are compared often and printed rarely, so they
//! are interned once and carried around as a copyable handle.

use std::fmt;
use std::sync::{PoisonError, RwLock};

use once_cell::sync::Lazy;
use string_interner::{DefaultBackend, DefaultSymbol, StringInterner};

static SYMBOLS: Lazy<RwLock<StringInterner<DefaultBackend>>> =
    Lazy::new(|| RwLock::new(StringInterner::default()));

/// An interned symbol name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Symbol(DefaultSymbol);

impl Symbol {
    /// Intern `name`, returning the existing handle if it was seen before.
    pub fn intern(name: &str) -> Self {
        let mut table = SYMBOLS.write().unwrap_or_else(PoisonError::into_inner);
        Symbol(table.get_or_intern(name))
    }

    /// The symbol's name as an owned string.
    pub fn name(&self) -> String {
        self.with_name(str::to_string)
    }

    /// Run `f` with the symbol's name without allocating.
    pub fn with_name<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&str) -> R,
    {
        let table = SYMBOLS.read().unwrap_or_else(PoisonError::into_inner);
        // Handles are only minted by `intern`, so resolution cannot miss.
        f(table.resolve(self.0).unwrap_or_default())
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.with_name(|name| write!(f, ":{name}"))
    }
}
