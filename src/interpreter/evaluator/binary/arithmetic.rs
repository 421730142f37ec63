use std::rc::Rc;

use crate::{
    ast::{Token, TokenKind},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates `+`, `-`, `*` or `/`.
    ///
    /// All four operators work on two numbers and follow IEEE-754, so
    /// dividing by zero yields an infinity or NaN rather than an error. `+`
    /// additionally joins two strings. Mixing a string and a number is an
    /// error; there is no implicit conversion.
    ///
    /// # Parameters
    /// - `operator`: The arithmetic operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the computed value.
    ///
    /// # Example
    /// ```
    /// use raft::{
    ///     ast::{Token, TokenKind},
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let slash = Token::new(TokenKind::Slash, "/", 1);
    /// let result = Context::eval_arithmetic(&slash, &Value::Number(1.0), &Value::Number(0.0));
    /// assert_eq!(result.unwrap(), Value::Number(f64::INFINITY));
    ///
    /// let plus = Token::new(TokenKind::Plus, "+", 1);
    /// assert!(Context::eval_arithmetic(&plus, &Value::from("a"), &Value::Number(1.0)).is_err());
    /// ```
    pub fn eval_arithmetic(operator: &Token, left: &Value, right: &Value) -> EvalResult<Value> {
        use TokenKind::{Minus, Plus, Slash, Star};

        if operator.kind == Plus
           && let (Value::String(a), Value::String(b)) = (left, right)
        {
            let joined: Rc<str> = Rc::from(format!("{a}{b}"));
            return Ok(Value::String(joined));
        }

        let (Some(a), Some(b)) = (left.as_number(), right.as_number()) else {
            return Err(if operator.kind == Plus {
                           RuntimeError::OperandsMustBeNumbersOrStrings { line: operator.line }
                       } else {
                           RuntimeError::OperandsMustBeNumbers { operator: operator.lexeme.clone(),
                                                                 line:     operator.line, }
                       });
        };

        Ok(Value::Number(match operator.kind {
                             Plus => a + b,
                             Minus => a - b,
                             Star => a * b,
                             Slash => a / b,
                             _ => unreachable!(),
                         }))
    }
}
