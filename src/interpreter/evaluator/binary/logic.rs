use crate::{
    ast::{Expr, Token, TokenKind},
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates `and` / `or` with short-circuiting.
    ///
    /// The result is one of the operand values, not a coerced boolean:
    /// `or` yields the left operand when it is truthy, `and` yields it when it
    /// is falsey. Only otherwise is the right operand evaluated and returned.
    ///
    /// # Example
    /// ```
    /// use raft::{
    ///     ast::{Expr, Token, TokenKind},
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let mut context = Context::with_output(Box::new(std::io::sink()));
    /// let or = Token::new(TokenKind::Or, "or", 1);
    ///
    /// let left = Expr::Literal(Value::Null);
    /// let right = Expr::Literal(Value::from("fallback"));
    ///
    /// let result = context.eval_logical(&left, &or, &right).unwrap();
    /// assert_eq!(result, Value::from("fallback"));
    /// ```
    pub fn eval_logical(&mut self,
                        left: &Expr,
                        operator: &Token,
                        right: &Expr)
                        -> EvalResult<Value> {
        let left = self.eval(left)?;

        let short_circuits = match operator.kind {
            TokenKind::Or => left.is_truthy(),
            TokenKind::And => !left.is_truthy(),
            _ => unreachable!("eval_logical used with non logical operator"),
        };

        if short_circuits { Ok(left) } else { self.eval(right) }
    }
}
