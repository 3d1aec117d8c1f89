//! Runtime errors.
//!
//! `EvalErrorKind` is the structured form: evaluation code can return
//! `Result<_, EvalErrorKind>` and use `?`, then convert at the boundary with
//! `Value::from`. The factory functions build the `Value::Error` sentinel
//! directly and are the usual entry point. Either way the message is the
//! kind's `Display` output.

use std::fmt;

use monkey_ir::{InfixOperator, PrefixOperator};

use crate::value::{Value, ValueType};

/// Typed runtime error category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    // Type/Operator
    TypeMismatch {
        left: ValueType,
        operator: InfixOperator,
        right: ValueType,
    },
    UnknownPrefixOperator {
        operator: PrefixOperator,
        operand: ValueType,
    },
    UnknownInfixOperator {
        left: ValueType,
        operator: InfixOperator,
        right: ValueType,
    },

    // Arithmetic
    DivisionByZero,

    // Access
    IdentifierNotFound {
        name: String,
    },

    // Function
    NotAFunction {
        found: ValueType,
    },
    ArityMismatch {
        expected: usize,
        got: usize,
    },
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TypeMismatch {
                left,
                operator,
                right,
            } => write!(f, "type mismatch: {left} {operator} {right}"),
            Self::UnknownPrefixOperator { operator, operand } => {
                write!(f, "unknown operator: {operator}{operand}")
            }
            Self::UnknownInfixOperator {
                left,
                operator,
                right,
            } => write!(f, "unknown operator: {left} {operator} {right}"),
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::IdentifierNotFound { name } => write!(f, "identifier not found: {name}"),
            Self::NotAFunction { found } => write!(f, "not a function: {found}"),
            Self::ArityMismatch { expected, got } => {
                write!(f, "wrong number of arguments: want={expected}, got={got}")
            }
        }
    }
}

impl std::error::Error for EvalErrorKind {}

// Factory functions

/// Operands of an infix operator have different types.
#[cold]
pub fn type_mismatch(left: ValueType, operator: InfixOperator, right: ValueType) -> Value {
    EvalErrorKind::TypeMismatch {
        left,
        operator,
        right,
    }
    .into()
}

/// Prefix operator applied to an operand type it does not support.
#[cold]
pub fn unknown_prefix_operator(operator: PrefixOperator, operand: ValueType) -> Value {
    EvalErrorKind::UnknownPrefixOperator { operator, operand }.into()
}

/// Infix operator applied to same-typed operands it does not support.
#[cold]
pub fn unknown_infix_operator(left: ValueType, operator: InfixOperator, right: ValueType) -> Value {
    EvalErrorKind::UnknownInfixOperator {
        left,
        operator,
        right,
    }
    .into()
}

#[cold]
pub fn identifier_not_found(name: &str) -> Value {
    EvalErrorKind::IdentifierNotFound {
        name: name.to_string(),
    }
    .into()
}

/// Call target is not a function.
#[cold]
pub fn not_a_function(found: ValueType) -> Value {
    EvalErrorKind::NotAFunction { found }.into()
}

#[cold]
pub fn wrong_argument_count(expected: usize, got: usize) -> Value {
    EvalErrorKind::ArityMismatch { expected, got }.into()
}

#[cold]
pub fn division_by_zero() -> Value {
    EvalErrorKind::DivisionByZero.into()
}
