//! Prefix and infix operators.
//!
//! Both sets are closed. `Display` writes the source symbol, so a node
//! renders exactly as if it had stored the operator text.

use std::fmt;

use crate::TokenKind;

/// Prefix (unary) operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum PrefixOperator {
    /// `!x`
    Bang,
    /// `-x`
    Minus,
}

impl PrefixOperator {
    /// Returns the source-level symbol for this operator.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Bang => "!",
            Self::Minus => "-",
        }
    }

    /// The token kind that introduces this operator.
    pub const fn token_kind(self) -> TokenKind {
        match self {
            Self::Bang => TokenKind::Bang,
            Self::Minus => TokenKind::Minus,
        }
    }

    /// Map a token kind to the prefix operator it denotes, if any.
    pub const fn from_token_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Bang => Some(Self::Bang),
            TokenKind::Minus => Some(Self::Minus),
            _ => None,
        }
    }
}

impl fmt::Display for PrefixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}

/// Infix (binary) operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum InfixOperator {
    // Arithmetic
    Plus,
    Minus,
    Asterisk,
    Slash,

    // Comparison
    Lt,
    Gt,
    Eq,
    NotEq,
}

impl InfixOperator {
    /// Returns the source-level symbol for this operator.
    ///
    /// Used in rendering and in runtime error messages.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Asterisk => "*",
            Self::Slash => "/",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Eq => "==",
            Self::NotEq => "!=",
        }
    }

    /// The token kind that introduces this operator.
    pub const fn token_kind(self) -> TokenKind {
        match self {
            Self::Plus => TokenKind::Plus,
            Self::Minus => TokenKind::Minus,
            Self::Asterisk => TokenKind::Asterisk,
            Self::Slash => TokenKind::Slash,
            Self::Lt => TokenKind::Lt,
            Self::Gt => TokenKind::Gt,
            Self::Eq => TokenKind::Eq,
            Self::NotEq => TokenKind::NotEq,
        }
    }

    /// Map a token kind to the infix operator it denotes, if any.
    pub const fn from_token_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Plus => Some(Self::Plus),
            TokenKind::Minus => Some(Self::Minus),
            TokenKind::Asterisk => Some(Self::Asterisk),
            TokenKind::Slash => Some(Self::Slash),
            TokenKind::Lt => Some(Self::Lt),
            TokenKind::Gt => Some(Self::Gt),
            TokenKind::Eq => Some(Self::Eq),
            TokenKind::NotEq => Some(Self::NotEq),
            _ => None,
        }
    }

    /// Returns true for the comparison operators, which produce booleans.
    pub const fn is_comparison(self) -> bool {
        matches!(self, Self::Lt | Self::Gt | Self::Eq | Self::NotEq)
    }
}

impl fmt::Display for InfixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}
