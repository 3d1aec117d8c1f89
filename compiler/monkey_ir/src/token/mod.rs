//! Token representation.
//!
//! A token pairs a lexical class with the exact text it was produced from.
//! Syntax-tree nodes store the token they start with and read their
//! literal back from it.

mod kind;

pub use kind::TokenKind;

use std::fmt;

/// A lexical token: its class and its literal source text.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Self {
        Token {
            kind,
            literal: literal.into(),
        }
    }

    /// The literal text this token was produced from.
    #[inline]
    pub fn literal(&self) -> &str {
        &self.literal
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:?})", self.kind, self.literal)
    }
}
