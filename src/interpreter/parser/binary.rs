use crate::{
    ast::{Expr, TokenKind},
    error::ParseError,
    interpreter::parser::core::{ParseResult, Parser},
};

impl Parser<'_> {
    /// Parses an assignment, or falls through to `logic_or`.
    ///
    /// Assignment is right-associative: `a = b = c` assigns `c` to `b` and
    /// the result to `a`. The left-hand side is parsed as an ordinary
    /// expression first; only a bare variable is a valid target. Any other
    /// target is reported at the `=` token without unwinding, and the left
    /// expression is returned in place of the assignment.
    ///
    /// Grammar: `assignment := IDENTIFIER "=" assignment | logic_or`
    pub(in crate::interpreter::parser) fn assignment(&mut self) -> ParseResult<Expr> {
        let expr = self.logic_or()?;

        if self.match_kinds(&[TokenKind::Equal]) {
            let equals = self.previous().clone();
            let value = self.assignment()?;

            return match expr {
                Expr::Variable { name } => Ok(Expr::Assign { name,
                                                             value: Box::new(value) }),
                other => {
                    self.report(&ParseError::InvalidAssignmentTarget { line: equals.line });
                    Ok(other)
                },
            };
        }

        Ok(expr)
    }

    /// Parses short-circuiting `or` chains.
    ///
    /// Grammar: `logic_or := logic_and ( "or" logic_and )*`
    pub(in crate::interpreter::parser) fn logic_or(&mut self) -> ParseResult<Expr> {
        let mut left = self.logic_and()?;
        while self.match_kinds(&[TokenKind::Or]) {
            let operator = self.previous().clone();
            let right = self.logic_and()?;
            left = Expr::logical(left, operator, right);
        }
        Ok(left)
    }

    /// Parses short-circuiting `and` chains.
    ///
    /// Grammar: `logic_and := equality ( "and" equality )*`
    pub(in crate::interpreter::parser) fn logic_and(&mut self) -> ParseResult<Expr> {
        let mut left = self.equality()?;
        while self.match_kinds(&[TokenKind::And]) {
            let operator = self.previous().clone();
            let right = self.equality()?;
            left = Expr::logical(left, operator, right);
        }
        Ok(left)
    }

    /// Parses equality operators.
    ///
    /// Handles left-associative binary operators: `==` and `!=`.
    ///
    /// Grammar: `equality := comparison ( ( "!=" | "==" ) comparison )*`
    pub(in crate::interpreter::parser) fn equality(&mut self) -> ParseResult<Expr> {
        let mut left = self.comparison()?;
        while self.match_kinds(&[TokenKind::BangEqual, TokenKind::EqualEqual]) {
            let operator = self.previous().clone();
            let right = self.comparison()?;
            left = Expr::binary(left, operator, right);
        }
        Ok(left)
    }

    /// Parses relational operators.
    ///
    /// Grammar: `comparison := term ( ( ">" | ">=" | "<" | "<=" ) term )*`
    pub(in crate::interpreter::parser) fn comparison(&mut self) -> ParseResult<Expr> {
        let mut left = self.term()?;
        while self.match_kinds(&[TokenKind::Greater,
                                 TokenKind::GreaterEqual,
                                 TokenKind::Less,
                                 TokenKind::LessEqual])
        {
            let operator = self.previous().clone();
            let right = self.term()?;
            left = Expr::binary(left, operator, right);
        }
        Ok(left)
    }

    /// Parses addition and subtraction.
    ///
    /// The loop folds each new operand onto the tree built so far, so
    /// `1 - 2 - 3` becomes `(1 - 2) - 3`.
    ///
    /// Grammar: `term := factor ( ( "-" | "+" ) factor )*`
    pub(in crate::interpreter::parser) fn term(&mut self) -> ParseResult<Expr> {
        let mut left = self.factor()?;
        while self.match_kinds(&[TokenKind::Minus, TokenKind::Plus]) {
            let operator = self.previous().clone();
            let right = self.factor()?;
            left = Expr::binary(left, operator, right);
        }
        Ok(left)
    }

    /// Parses multiplication and division.
    ///
    /// Grammar: `factor := unary ( ( "/" | "*" ) unary )*`
    pub(in crate::interpreter::parser) fn factor(&mut self) -> ParseResult<Expr> {
        let mut left = self.unary()?;
        while self.match_kinds(&[TokenKind::Slash, TokenKind::Star]) {
            let operator = self.previous().clone();
            let right = self.unary()?;
            left = Expr::binary(left, operator, right);
        }
        Ok(left)
    }
}
