use crate::{
    ast::{Token, TokenKind},
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a binary operation between two already evaluated operands.
    ///
    /// Arithmetic operators go to `eval_arithmetic`; equality and relational
    /// operators go to `eval_comparison`. The logical operators are not
    /// handled here since they must not evaluate their right operand eagerly;
    /// see `eval_logical`.
    ///
    /// # Parameters
    /// - `operator`: The operator token; its line is used for errors.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the evaluated result.
    ///
    /// # Example
    /// ```
    /// use raft::{
    ///     ast::{Token, TokenKind},
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let plus = Token::new(TokenKind::Plus, "+", 1);
    ///
    /// let result = Context::eval_binary(&plus, &Value::Number(3.0), &Value::Number(4.0));
    /// assert_eq!(result.unwrap(), Value::Number(7.0));
    ///
    /// let result = Context::eval_binary(&plus, &Value::from("ab"), &Value::from("cd"));
    /// assert_eq!(result.unwrap(), Value::from("abcd"));
    /// ```
    pub fn eval_binary(operator: &Token, left: &Value, right: &Value) -> EvalResult<Value> {
        use TokenKind::{
            BangEqual, EqualEqual, Greater, GreaterEqual, Less, LessEqual, Minus, Plus, Slash,
            Star,
        };

        match operator.kind {
            Plus | Minus | Star | Slash => Self::eval_arithmetic(operator, left, right),
            EqualEqual | BangEqual | Greater | GreaterEqual | Less | LessEqual => {
                Self::eval_comparison(operator, left, right)
            },
            _ => unreachable!("eval_binary used with non binary operator"),
        }
    }
}
