//! Runtime values for the Monkey evaluator.
//!
//! # Sentinels
//!
//! `ReturnValue` and `Error` are ordinary values that also carry control
//! flow: when one is produced inside a statement sequence, the rest of the
//! sequence is skipped and the sentinel travels outward (see
//! [`crate::control`]). A `ReturnValue` is unwrapped at the nearest function
//! call or at the program boundary; an `Error` travels all the way out.
//!
//! Sentinels never nest. `ReturnValue` holds a `Heap<Value>`, whose
//! constructor is private to this module, so the only way to build one is
//! [`Value::return_value`], which passes an existing sentinel through.
//!
//! # Booleans and Null
//!
//! `Value::TRUE`, `Value::FALSE` and `Value::NULL` are the canonical
//! instances. Equality is by value, so any `Boolean(true)` compares equal
//! to `Value::TRUE`.

mod function;
mod heap;

use std::fmt;

use monkey_ir::FunctionLiteral;

pub use function::FunctionValue;
pub use heap::Heap;

use crate::environment::Environment;
use crate::errors::EvalErrorKind;

/// Type tag of a runtime value.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ValueType {
    Integer,
    Boolean,
    Null,
    Function,
    ReturnValue,
    Error,
}

impl ValueType {
    pub const fn as_str(self) -> &'static str {
        match self {
            ValueType::Integer => "INTEGER",
            ValueType::Boolean => "BOOLEAN",
            ValueType::Null => "NULL",
            ValueType::Function => "FUNCTION",
            ValueType::ReturnValue => "RETURN_VALUE",
            ValueType::Error => "ERROR",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Runtime value in the Monkey evaluator.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Integer(i64),
    Boolean(bool),
    Null,
    /// Closure over a function literal.
    Function(FunctionValue),
    /// Sentinel: a `return` in flight. Never wraps another sentinel.
    ReturnValue(Heap<Value>),
    /// Sentinel: a runtime error message.
    Error(String),
}

impl Value {
    pub const TRUE: Value = Value::Boolean(true);
    pub const FALSE: Value = Value::Boolean(false);
    pub const NULL: Value = Value::Null;

    // Factory Methods

    /// The canonical boolean for `value`.
    #[inline]
    pub fn from_bool(value: bool) -> Self {
        if value {
            Value::TRUE
        } else {
            Value::FALSE
        }
    }

    /// Capture `literal` in `env`.
    pub fn function(literal: &FunctionLiteral, env: &Environment) -> Self {
        Value::Function(FunctionValue::new(literal, env))
    }

    /// Wrap `value` as a returning sentinel.
    ///
    /// A value that is already a sentinel is returned unchanged: returning an
    /// error propagates the error, and a return inside a return stays single.
    pub fn return_value(value: Value) -> Self {
        if value.is_sentinel() {
            value
        } else {
            Value::ReturnValue(Heap::new(value))
        }
    }

    /// Error sentinel carrying `kind`'s message.
    pub fn error(kind: &EvalErrorKind) -> Self {
        Value::Error(kind.to_string())
    }

    // Inspection

    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Integer(_) => ValueType::Integer,
            Value::Boolean(_) => ValueType::Boolean,
            Value::Null => ValueType::Null,
            Value::Function(_) => ValueType::Function,
            Value::ReturnValue(_) => ValueType::ReturnValue,
            Value::Error(_) => ValueType::Error,
        }
    }

    /// Human-readable rendering, as a REPL would print it.
    pub fn inspect(&self) -> String {
        self.to_string()
    }

    /// `null` and `false` are falsy; everything else is truthy.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Null | Value::Boolean(false))
    }

    #[inline]
    pub fn is_sentinel(&self) -> bool {
        matches!(self, Value::ReturnValue(_) | Value::Error(_))
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    #[inline]
    pub fn is_return_value(&self) -> bool {
        matches!(self, Value::ReturnValue(_))
    }

    /// Strip a `ReturnValue` wrapper; any other value passes through.
    pub fn unwrap_return_value(self) -> Value {
        match self {
            Value::ReturnValue(inner) => Heap::into_inner(inner),
            other => other,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(value) => write!(f, "{value}"),
            Value::Boolean(value) => write!(f, "{value}"),
            Value::Null => f.write_str("null"),
            Value::Function(function) => fmt::Display::fmt(function, f),
            Value::ReturnValue(inner) => fmt::Display::fmt(inner, f),
            Value::Error(message) => write!(f, "ERROR: {message}"),
        }
    }
}

impl From<EvalErrorKind> for Value {
    fn from(kind: EvalErrorKind) -> Self {
        Value::error(&kind)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::from_bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

#[cfg(test)]
mod tests;
