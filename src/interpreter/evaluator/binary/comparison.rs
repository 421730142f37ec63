use crate::{
    ast::{Token, TokenKind},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a comparison of the form `Value <operator> Value`.
    ///
    /// `==` and `!=` accept any two values and use [`Value::is_equal`], so
    /// values of different types are simply unequal. The relational
    /// operators require two numbers.
    ///
    /// # Parameters
    /// - `operator`: The comparison operator.
    /// - `left`: The left-hand value.
    /// - `right`: The right-hand value.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing a boolean.
    ///
    /// # Example
    /// ```
    /// use raft::{
    ///     ast::{Token, TokenKind},
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let eq = Token::new(TokenKind::EqualEqual, "==", 1);
    /// let result = Context::eval_comparison(&eq, &Value::Number(1.0), &Value::from("1"));
    /// assert_eq!(result.unwrap(), Value::Boolean(false));
    ///
    /// let less = Token::new(TokenKind::Less, "<", 1);
    /// let result = Context::eval_comparison(&less, &Value::Number(1.0), &Value::Number(2.0));
    /// assert_eq!(result.unwrap(), Value::Boolean(true));
    /// ```
    pub fn eval_comparison(operator: &Token, left: &Value, right: &Value) -> EvalResult<Value> {
        use TokenKind::{BangEqual, EqualEqual, Greater, GreaterEqual, Less, LessEqual};

        match operator.kind {
            EqualEqual => return Ok(Value::Boolean(left.is_equal(right))),
            BangEqual => return Ok(Value::Boolean(!left.is_equal(right))),
            _ => {},
        }

        let (Some(a), Some(b)) = (left.as_number(), right.as_number()) else {
            return Err(RuntimeError::OperandsMustBeNumbers { operator: operator.lexeme.clone(),
                                                             line:     operator.line, });
        };

        Ok(Value::Boolean(match operator.kind {
                              Greater => a > b,
                              GreaterEqual => a >= b,
                              Less => a < b,
                              LessEqual => a <= b,
                              _ => unreachable!(),
                          }))
    }
}
