use std::fmt;
use std::sync::Arc;

use monkey_ir::ast::write_parameters;
use monkey_ir::{BlockStatement, FunctionLiteral, Identifier};

use super::Value;
use crate::environment::Environment;
use crate::errors::EvalErrorKind;

/// A closure: a function literal's parameters and body plus the
/// environment it was evaluated in.
///
/// Parameters and body are shared with the defining tree. The environment
/// is a handle, not a snapshot: later changes to captured bindings are
/// visible when the function runs, and every closure created in the same
/// scope sees the same bindings.
#[derive(Clone)]
pub struct FunctionValue {
    pub parameters: Arc<[Identifier]>,
    pub body: Arc<BlockStatement>,
    env: Environment,
}

impl FunctionValue {
    pub fn new(literal: &FunctionLiteral, env: &Environment) -> Self {
        FunctionValue {
            parameters: Arc::clone(&literal.parameters),
            body: Arc::clone(&literal.body),
            env: env.clone(),
        }
    }

    /// The captured (defining) environment.
    #[inline]
    pub fn env(&self) -> &Environment {
        &self.env
    }

    #[inline]
    pub fn arity(&self) -> usize {
        self.parameters.len()
    }

    /// Create the environment a call runs in.
    ///
    /// The new scope is enclosed by the captured environment, not the
    /// caller's, and binds each parameter to the argument at the same
    /// position.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(arity = self.parameters.len(), got = arguments.len())
    )]
    pub fn enclosed_environment(&self, arguments: Vec<Value>) -> Result<Environment, EvalErrorKind> {
        if arguments.len() != self.parameters.len() {
            return Err(EvalErrorKind::ArityMismatch {
                expected: self.parameters.len(),
                got: arguments.len(),
            });
        }
        let env = Environment::new_enclosed(&self.env);
        for (parameter, argument) in self.parameters.iter().zip(arguments) {
            env.set(parameter.name(), argument);
        }
        Ok(env)
    }
}

impl PartialEq for FunctionValue {
    /// Functions are equal only when they are the same closure: the same
    /// literal captured in the same scope.
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.parameters, &other.parameters)
            && Arc::ptr_eq(&self.body, &other.body)
            && Environment::ptr_eq(&self.env, &other.env)
    }
}

impl fmt::Display for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("fn(")?;
        write_parameters(f, &self.parameters)?;
        write!(f, ") {{\n{}\n}}", self.body)
    }
}

// The environment is left out: a recursive closure is reachable from its own scope.
impl fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionValue")
            .field("parameters", &self.parameters)
            .field("body", &self.body.to_string())
            .finish_non_exhaustive()
    }
}
