use std::collections::HashMap;

use crate::{
    ast::Token,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Opens a new innermost scope.
    pub(in crate::interpreter::evaluator) fn push_scope(&mut self) {
        self.scope_stack.push(HashMap::new());
        tracing::trace!(depth = self.scope_stack.len(), "scope pushed");
    }

    /// Drops the innermost scope. The global scope is never dropped.
    pub(in crate::interpreter::evaluator) fn pop_scope(&mut self) {
        if self.scope_stack.len() > 1 {
            self.scope_stack.pop();
        }
        tracing::trace!(depth = self.scope_stack.len(), "scope popped");
    }

    /// Binds `name` in the innermost scope.
    ///
    /// Redeclaring a name in the same scope replaces the old binding; a
    /// declaration in an inner scope shadows outer ones.
    pub fn define_local(&mut self, name: &str, value: Value) {
        if let Some(scope) = self.scope_stack.last_mut() {
            scope.insert(name.to_string(), value);
        }
    }

    /// Looks a variable up from the innermost scope outwards.
    ///
    /// # Example
    /// ```
    /// use raft::interpreter::{evaluator::core::Context, value::core::Value};
    ///
    /// let mut context = Context::with_output(Box::new(std::io::sink()));
    /// context.define_local("answer", Value::Number(42.0));
    ///
    /// assert_eq!(context.get_variable("answer"), Some(&Value::Number(42.0)));
    /// assert!(context.get_variable("question").is_none());
    /// // Native functions live in the global scope.
    /// assert!(context.get_variable("clock").is_some());
    /// ```
    #[must_use]
    pub fn get_variable(&self, name: &str) -> Option<&Value> {
        self.scope_stack.iter().rev().find_map(|scope| scope.get(name))
    }

    /// Overwrites the nearest existing binding of `name`.
    ///
    /// # Errors
    /// `UndefinedVariable` if no scope declares `name`; assignment never
    /// creates a variable.
    pub(in crate::interpreter::evaluator) fn assign_nearest(&mut self,
                                                            name: &Token,
                                                            value: Value)
                                                            -> EvalResult<()> {
        let slot = self.scope_stack
                       .iter_mut()
                       .rev()
                       .find_map(|scope| scope.get_mut(&name.lexeme));

        match slot {
            Some(slot) => {
                *slot = value;
                Ok(())
            },
            None => Err(RuntimeError::UndefinedVariable { name: name.lexeme.clone(),
                                                          line: name.line, }),
        }
    }
}
