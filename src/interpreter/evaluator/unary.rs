use crate::{
    ast::{Token, TokenKind},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a prefix operator applied to an already evaluated operand.
    ///
    /// Supported operators:
    /// - `-`: numeric negation. Any other operand is an error.
    /// - `!`: logical not, defined for every value through truthiness.
    ///
    /// # Parameters
    /// - `operator`: The operator token; its line is used for errors.
    /// - `right`: The operand.
    ///
    /// # Returns
    /// The computed `Value` wrapped in `EvalResult`.
    ///
    /// # Example
    /// ```
    /// use raft::{
    ///     ast::{Token, TokenKind},
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let minus = Token::new(TokenKind::Minus, "-", 1);
    /// let v = Context::eval_unary(&minus, &Value::Number(5.0)).unwrap();
    /// assert_eq!(v, Value::Number(-5.0));
    ///
    /// let bang = Token::new(TokenKind::Bang, "!", 1);
    /// let v = Context::eval_unary(&bang, &Value::Null).unwrap();
    /// assert_eq!(v, Value::Boolean(true));
    ///
    /// assert!(Context::eval_unary(&minus, &Value::from("five")).is_err());
    /// ```
    pub fn eval_unary(operator: &Token, right: &Value) -> EvalResult<Value> {
        match operator.kind {
            TokenKind::Minus => match right {
                Value::Number(n) => Ok(Value::Number(-n)),
                _ => Err(RuntimeError::OperandMustBeNumber { operator: operator.lexeme.clone(),
                                                             found:    right.type_name(),
                                                             line:     operator.line, }),
            },
            TokenKind::Bang => Ok(Value::Boolean(!right.is_truthy())),
            _ => unreachable!("eval_unary used with non unary operator"),
        }
    }
}
