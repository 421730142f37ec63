use crate::{
    ast::{Expr, TokenKind},
    error::ParseError,
    interpreter::{
        parser::core::{ParseResult, Parser},
        value::core::Value,
    },
};

impl Parser<'_> {
    /// Parses a unary expression.
    ///
    /// Supports prefix operators:
    /// - `-`  (numeric negation)
    /// - `!`  (logical not)
    ///
    /// Unary operators are right-associative, so an input like `!-x` is parsed
    /// as `!( -x )`.
    ///
    /// Every parenthesized group and every chained assignment passes back
    /// through here, so this is where expression nesting is counted.
    ///
    /// Grammar:
    /// ```text
    ///     unary := ("!" | "-") unary
    ///            | primary
    /// ```
    pub(in crate::interpreter::parser) fn unary(&mut self) -> ParseResult<Expr> {
        self.nested(|parser| {
                if parser.match_kinds(&[TokenKind::Bang, TokenKind::Minus]) {
                    let operator = parser.previous().clone();
                    let right = parser.unary()?;
                    return Ok(Expr::Unary { operator,
                                            right: Box::new(right) });
                }
                parser.primary()
            })
    }

    /// Parses a primary (atomic) expression.
    ///
    /// Literals, variable references and parenthesized groups. Every
    /// alternative is accepted only after an explicit test of the current
    /// token; anything else is an `Expect expression.` error at that token.
    ///
    /// Grammar (simplified):
    /// ```text
    ///     primary := NUMBER | STRING | "true" | "false" | "nil"
    ///              | "(" expression ")"
    ///              | IDENTIFIER
    /// ```
    pub(in crate::interpreter::parser) fn primary(&mut self) -> ParseResult<Expr> {
        if self.match_kinds(&[TokenKind::False]) {
            return Ok(Expr::Literal(Value::Boolean(false)));
        }
        if self.match_kinds(&[TokenKind::True]) {
            return Ok(Expr::Literal(Value::Boolean(true)));
        }
        if self.match_kinds(&[TokenKind::Nil]) {
            return Ok(Expr::Literal(Value::Null));
        }
        if self.match_kinds(&[TokenKind::Number, TokenKind::String]) {
            let token = self.previous();
            return token.literal
                        .as_ref()
                        .map(|literal| Expr::Literal(Value::from(literal)))
                        .ok_or_else(|| ParseError::expected_expression(token));
        }
        if self.match_kinds(&[TokenKind::Identifier]) {
            return Ok(Expr::Variable { name: self.previous().clone() });
        }
        if self.match_kinds(&[TokenKind::LeftParen]) {
            let expr = self.expression()?;
            self.consume(TokenKind::RightParen, "Expect ')' after expression.")?;
            return Ok(Expr::Grouping(Box::new(expr)));
        }

        Err(ParseError::expected_expression(self.peek()))
    }
}
