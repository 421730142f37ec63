use crate::{
    ast::{Expr, Stmt, TokenKind},
    interpreter::{
        parser::core::{ParseResult, Parser},
        value::core::Value,
    },
};

impl Parser<'_> {
    /// Parses a single declaration and recovers from any error inside it.
    ///
    /// This is the recovery point of the parser. An error raised anywhere
    /// below is reported, the parser skips to the next statement boundary,
    /// and `None` is returned in place of the broken statement.
    ///
    /// Grammar: `declaration := varDecl | statement`
    pub(in crate::interpreter::parser) fn declaration(&mut self) -> Option<Stmt> {
        let result = if self.match_kinds(&[TokenKind::Var]) {
            self.var_declaration()
        } else {
            self.statement()
        };

        match result {
            Ok(statement) => Some(statement),
            Err(error) => {
                self.report(&error);
                self.synchronize();
                None
            },
        }
    }

    /// Parses a variable declaration after its `var` keyword.
    ///
    /// Grammar: `varDecl := "var" IDENTIFIER ( "=" expression )? ";"`
    fn var_declaration(&mut self) -> ParseResult<Stmt> {
        let name = self.consume(TokenKind::Identifier, "Expect variable name.")?;

        let initializer = if self.match_kinds(&[TokenKind::Equal]) {
            Some(self.expression()?)
        } else {
            None
        };

        self.consume(TokenKind::Semicolon, "Expect ';' after variable declaration.")?;
        Ok(Stmt::Var { name, initializer })
    }

    /// Parses a statement.
    ///
    /// The leading keyword picks the form; anything else is an expression
    /// statement.
    ///
    /// Grammar:
    /// ```text
    ///     statement := exprStmt | forStmt | ifStmt | printStmt | whileStmt | block
    /// ```
    fn statement(&mut self) -> ParseResult<Stmt> {
        self.nested(Self::statement_body)
    }

    fn statement_body(&mut self) -> ParseResult<Stmt> {
        if self.match_kinds(&[TokenKind::For]) {
            return self.for_statement();
        }
        if self.match_kinds(&[TokenKind::If]) {
            return self.if_statement();
        }
        if self.match_kinds(&[TokenKind::Print]) {
            return self.print_statement();
        }
        if self.match_kinds(&[TokenKind::While]) {
            return self.while_statement();
        }
        if self.match_kinds(&[TokenKind::LeftBrace]) {
            return Ok(Stmt::Block(self.block()?));
        }
        self.expression_statement()
    }

    /// Parses a `for` loop and rewrites it into `while` form.
    ///
    /// ```text
    ///     for (init; cond; incr) body
    /// ```
    /// becomes
    /// ```text
    ///     { init; while (cond) { body; incr; } }
    /// ```
    /// A missing condition is `true`. Without an increment the body is not
    /// wrapped; without an initializer there is no outer block.
    ///
    /// Grammar:
    /// ```text
    ///     forStmt := "for" "(" ( varDecl | exprStmt | ";" )
    ///                expression? ";"
    ///                expression? ")" statement
    /// ```
    fn for_statement(&mut self) -> ParseResult<Stmt> {
        self.consume(TokenKind::LeftParen, "Expect '(' after 'for'.")?;

        let initializer = if self.match_kinds(&[TokenKind::Semicolon]) {
            None
        } else if self.match_kinds(&[TokenKind::Var]) {
            Some(self.var_declaration()?)
        } else {
            Some(self.expression_statement()?)
        };

        let condition = if self.check(TokenKind::Semicolon) {
            None
        } else {
            Some(self.expression()?)
        };
        self.consume(TokenKind::Semicolon, "Expect ';' after loop condition.")?;

        let increment = if self.check(TokenKind::RightParen) {
            None
        } else {
            Some(self.expression()?)
        };
        self.consume(TokenKind::RightParen, "Expect ')' after for clauses.")?;

        let mut body = self.statement()?;

        if let Some(increment) = increment {
            body = Stmt::Block(vec![body, Stmt::Expression(increment)]);
        }

        let condition = condition.unwrap_or(Expr::Literal(Value::Boolean(true)));
        body = Stmt::While { condition,
                             body: Box::new(body) };

        if let Some(initializer) = initializer {
            body = Stmt::Block(vec![initializer, body]);
        }

        Ok(body)
    }

    /// Parses an `if` statement with an optional `else` branch.
    ///
    /// An `else` binds to the nearest `if`.
    ///
    /// Grammar: `ifStmt := "if" "(" expression ")" statement ( "else" statement )?`
    fn if_statement(&mut self) -> ParseResult<Stmt> {
        self.consume(TokenKind::LeftParen, "Expect '(' after 'if'.")?;
        let condition = self.expression()?;
        self.consume(TokenKind::RightParen, "Expect ')' after if condition.")?;

        let then_branch = Box::new(self.statement()?);
        let else_branch = if self.match_kinds(&[TokenKind::Else]) {
            Some(Box::new(self.statement()?))
        } else {
            None
        };

        Ok(Stmt::If { condition,
                      then_branch,
                      else_branch })
    }

    /// Grammar: `printStmt := "print" expression ";"`
    fn print_statement(&mut self) -> ParseResult<Stmt> {
        let keyword = self.previous().clone();
        let value = self.expression()?;
        self.consume(TokenKind::Semicolon, "Expect ';' after value.")?;
        Ok(Stmt::Print { keyword, value })
    }

    /// Grammar: `whileStmt := "while" "(" expression ")" statement`
    fn while_statement(&mut self) -> ParseResult<Stmt> {
        self.consume(TokenKind::LeftParen, "Expect '(' after 'while'.")?;
        let condition = self.expression()?;
        self.consume(TokenKind::RightParen, "Expect ')' after condition.")?;
        let body = Box::new(self.statement()?);

        Ok(Stmt::While { condition, body })
    }

    /// Grammar: `exprStmt := expression ";"`
    fn expression_statement(&mut self) -> ParseResult<Stmt> {
        let expr = self.expression()?;
        self.consume(TokenKind::Semicolon, "Expect ';' after expression.")?;
        Ok(Stmt::Expression(expr))
    }
}
