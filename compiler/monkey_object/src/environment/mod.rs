//! Lexical environments.
//!
//! An `Environment` is a handle to one scope. Cloning the handle aliases the
//! scope: a binding changed through one clone is seen through every other,
//! which is what lets closures defined in the same scope share state.
//!
//! A closure stored in the scope it captures forms an `Rc` cycle and is never
//! freed. Programs are short-lived, so this is accepted.

use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::errors::EvalErrorKind;
use crate::value::Value;

/// A single-threaded scope wrapper for reference-counted interior mutability.
///
/// Wraps `Rc<RefCell<T>>` so every scope allocation goes through
/// [`LocalScope::new`]. Not thread-safe.
#[repr(transparent)]
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    /// Borrow the inner value immutably.
    #[inline]
    pub fn borrow(&self) -> Ref<'_, T> {
        self.0.borrow()
    }

    /// Borrow the inner value mutably.
    #[inline]
    pub fn borrow_mut(&self) -> RefMut<'_, T> {
        self.0.borrow_mut()
    }

    /// Whether two handles share one allocation.
    #[inline]
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Rc::ptr_eq(&this.0, &other.0)
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

impl<T: fmt::Debug> fmt::Debug for LocalScope<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LocalScope").field(&self.0).finish()
    }
}

impl<T: Default> Default for LocalScope<T> {
    fn default() -> Self {
        LocalScope::new(T::default())
    }
}

/// Bindings of one scope plus the scope it is nested in.
#[derive(Debug, Default)]
struct Scope {
    bindings: FxHashMap<String, Value>,
    outer: Option<Environment>,
}

impl Scope {
    fn lookup(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.bindings.get(name) {
            return Some(value.clone());
        }
        if let Some(outer) = &self.outer {
            return outer.get(name);
        }
        None
    }

    /// Hands `value` back when no scope in the chain binds `name`.
    fn assign(&mut self, name: &str, value: Value) -> Result<(), Value> {
        if let Some(slot) = self.bindings.get_mut(name) {
            *slot = value;
            return Ok(());
        }
        match &self.outer {
            Some(outer) => outer.scope.borrow_mut().assign(name, value),
            None => Err(value),
        }
    }
}

/// Handle to a lexical scope.
#[derive(Clone, Debug, Default)]
pub struct Environment {
    scope: LocalScope<Scope>,
}

impl Environment {
    /// An empty global scope.
    pub fn new() -> Self {
        Environment::default()
    }

    /// An empty scope nested in `outer`.
    pub fn new_enclosed(outer: &Environment) -> Self {
        let env = Environment {
            scope: LocalScope::new(Scope {
                bindings: FxHashMap::default(),
                outer: Some(outer.clone()),
            }),
        };
        tracing::trace!(depth = env.depth(), "enclosed environment");
        env
    }

    /// Look `name` up in this scope, then outward.
    pub fn get(&self, name: &str) -> Option<Value> {
        self.scope.borrow().lookup(name)
    }

    /// Bind `name` in this scope, shadowing any outer binding.
    ///
    /// Returns the bound value.
    pub fn set(&self, name: impl Into<String>, value: Value) -> Value {
        self.scope
            .borrow_mut()
            .bindings
            .insert(name.into(), value.clone());
        value
    }

    /// Rebind the nearest existing `name` in the chain.
    pub fn assign(&self, name: &str, value: Value) -> Result<(), EvalErrorKind> {
        let result = self.scope.borrow_mut().assign(name, value);
        result.map_err(|_| {
            tracing::debug!(identifier = name, "assignment to unbound identifier");
            EvalErrorKind::IdentifierNotFound {
                name: name.to_string(),
            }
        })
    }

    /// Number of scopes from this one out to the global scope.
    pub fn depth(&self) -> usize {
        let mut depth = 1;
        let mut current = self.scope.borrow().outer.clone();
        while let Some(env) = current {
            depth += 1;
            current = env.scope.borrow().outer.clone();
        }
        depth
    }

    /// Whether `a` and `b` are handles to the same scope.
    #[inline]
    pub fn ptr_eq(a: &Environment, b: &Environment) -> bool {
        LocalScope::ptr_eq(&a.scope, &b.scope)
    }
}
