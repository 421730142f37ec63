use std::{
    collections::HashMap,
    io::{self, Write},
    rc::Rc,
};

use crate::{
    ast::{Expr, Stmt},
    error::RuntimeError,
    interpreter::value::{callable::natives, core::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// Holds the stack of lexical scopes (globals at the bottom) and the sink
/// `print` writes to. A `Context` is created once and reused across calls to
/// [`Context::execute`], so state persists between them; the interactive
/// prompt relies on that.
pub struct Context {
    pub(in crate::interpreter::evaluator) scope_stack: Vec<HashMap<String, Value>>,
    output:                                            Box<dyn Write>,
}

#[allow(clippy::new_without_default)]
impl Context {
    /// Creates a context that prints to standard output.
    #[must_use]
    pub fn new() -> Self {
        Self::with_output(Box::new(io::stdout()))
    }

    /// Creates a context that prints to `output`.
    ///
    /// The global scope starts out holding the native functions.
    #[must_use]
    pub fn with_output(output: Box<dyn Write>) -> Self {
        let globals = natives().into_iter()
                               .map(|native| {
                                   (native.name().to_string(), Value::Callable(Rc::new(native)))
                               })
                               .collect();
        Self { scope_stack: vec![globals],
               output }
    }

    /// Executes a program.
    ///
    /// Statements run in order; the first runtime error stops execution and
    /// is returned.
    ///
    /// # Example
    /// ```
    /// use raft::{
    ///     ast::{Expr, Stmt, Token, TokenKind},
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let mut context = Context::with_output(Box::new(std::io::sink()));
    /// let program = vec![Stmt::Var { name:        Token::new(TokenKind::Identifier, "x", 1),
    ///                                initializer: Some(Expr::Literal(Value::Number(2.0))), }];
    ///
    /// context.execute(&program).unwrap();
    /// assert_eq!(context.get_variable("x"), Some(&Value::Number(2.0)));
    /// ```
    pub fn execute(&mut self, statements: &[Stmt]) -> EvalResult<()> {
        for statement in statements {
            self.execute_statement(statement)?;
        }
        Ok(())
    }

    /// Executes a single statement.
    pub fn execute_statement(&mut self, statement: &Stmt) -> EvalResult<()> {
        match statement {
            Stmt::Expression(expr) => {
                self.eval(expr)?;
            },
            Stmt::Print { keyword, value } => {
                let value = self.eval(value)?;
                writeln!(self.output, "{value}").map_err(|source| RuntimeError::Io { source,
                                                                                    line: keyword.line, })?;
            },
            Stmt::Var { name, initializer } => {
                let value = match initializer {
                    Some(expr) => self.eval(expr)?,
                    None => Value::Null,
                };
                self.define_local(&name.lexeme, value);
            },
            Stmt::Block(statements) => self.execute_block(statements)?,
            Stmt::If { condition,
                       then_branch,
                       else_branch, } => {
                if self.eval(condition)?.is_truthy() {
                    self.execute_statement(then_branch)?;
                } else if let Some(else_branch) = else_branch {
                    self.execute_statement(else_branch)?;
                }
            },
            Stmt::While { condition, body } => {
                while self.eval(condition)?.is_truthy() {
                    self.execute_statement(body)?;
                }
            },
        }
        Ok(())
    }

    /// Runs `statements` in a fresh scope that is dropped afterwards, even
    /// when a statement fails.
    fn execute_block(&mut self, statements: &[Stmt]) -> EvalResult<()> {
        self.push_scope();
        let result = self.execute(statements);
        self.pop_scope();
        result
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. The evaluator
    /// dispatches on the expression variant.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal(value) => Ok(value.clone()),
            Expr::Variable { name } => {
                self.get_variable(&name.lexeme)
                    .cloned()
                    .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.lexeme.clone(),
                                                                     line: name.line, })
            },
            Expr::Assign { name, value } => {
                let value = self.eval(value)?;
                self.assign_nearest(name, value.clone())?;
                Ok(value)
            },
            Expr::Grouping(expr) => self.eval(expr),
            Expr::Unary { operator, right } => {
                let right = self.eval(right)?;
                Self::eval_unary(operator, &right)
            },
            Expr::Binary { left,
                           operator,
                           right, } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_binary(operator, &left, &right)
            },
            Expr::Logical { left,
                            operator,
                            right, } => self.eval_logical(left, operator, right),
        }
    }

    /// Invokes a callable value.
    ///
    /// Checks that `callee` is callable and that the number of arguments
    /// matches its arity before calling it.
    ///
    /// # Errors
    /// `NotCallable` for any other value, `ArgumentCountMismatch` on an arity
    /// mismatch, or whatever the callable itself returns.
    pub fn call_value(&mut self,
                      callee: &Value,
                      arguments: Vec<Value>,
                      line: usize)
                      -> EvalResult<Value> {
        let Value::Callable(callable) = callee else {
            return Err(RuntimeError::NotCallable { found: callee.type_name(),
                                                   line });
        };

        if arguments.len() != callable.arity() {
            return Err(RuntimeError::ArgumentCountMismatch { expected: callable.arity(),
                                                             found: arguments.len(),
                                                             line });
        }

        callable.call(self, arguments)
    }
}
