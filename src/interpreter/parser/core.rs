use crate::{
    ast::{Expr, Stmt, Token, TokenKind},
    error::{ParseError, Reporter},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// How deeply statements and expressions may nest before parsing gives up.
///
/// Keeps pathological input such as thousands of nested parentheses from
/// exhausting the stack.
pub const MAX_NESTING: usize = 128;

/// A single-pass recursive-descent parser with one token of lookahead.
///
/// Each grammar rule is one method. Rule failures travel up as `Err` until
/// the `declaration` rule catches them, reports them to the
/// `Reporter`, and skips ahead to the next statement boundary.
///
/// The only state is the cursor into the token slice, so independent parses
/// never interfere with each other.
pub struct Parser<'a> {
    tokens:   &'a [Token],
    current:  usize,
    depth:    usize,
    end:      Token,
    reporter: &'a mut dyn Reporter,
}

impl<'a> Parser<'a> {
    /// Creates a parser over `tokens`.
    ///
    /// The slice should end with an `Eof` token, as produced by
    /// [`scan`](crate::interpreter::lexer::scan). Reading past the end of a
    /// slice that lacks one behaves as if it were there.
    pub fn new(tokens: &'a [Token], reporter: &'a mut dyn Reporter) -> Self {
        let end = Token::eof(tokens.last().map_or(1, |token| token.line));
        Self { tokens,
               current: 0,
               depth: 0,
               end,
               reporter }
    }

    /// Parses the whole token sequence.
    ///
    /// Never fails: every syntax error is reported and recovered from, and
    /// the statements that were fully built are returned in order.
    ///
    /// Grammar: `program := declaration* EOF`
    ///
    /// # Example
    /// ```
    /// use raft::{
    ///     ast::Stmt,
    ///     error::Diagnostics,
    ///     interpreter::{lexer::scan, parser::core::Parser},
    /// };
    ///
    /// let mut diagnostics = Diagnostics::default();
    /// let tokens = scan("print 1; print ;", &mut diagnostics);
    /// let program = Parser::new(&tokens, &mut diagnostics).parse();
    ///
    /// assert_eq!(program.len(), 1);
    /// assert!(matches!(program[0], Stmt::Print { .. }));
    /// assert_eq!(diagnostics.len(), 1);
    /// ```
    pub fn parse(mut self) -> Vec<Stmt> {
        let mut statements = Vec::new();
        while !self.is_at_end() {
            if let Some(statement) = self.declaration() {
                statements.push(statement);
            }
        }
        statements
    }

    /// Parses a full expression.
    ///
    /// This is the entry point for expression parsing. It begins at the
    /// lowest-precedence level, assignment, and recursively descends through
    /// the precedence hierarchy.
    ///
    /// Grammar: `expression := assignment`
    pub(in crate::interpreter::parser) fn expression(&mut self) -> ParseResult<Expr> {
        self.assignment()
    }

    /// Runs `rule` one nesting level deeper.
    ///
    /// Fails with `TooMuchNesting` at the current token once
    /// [`MAX_NESTING`] levels are open.
    pub(in crate::interpreter::parser) fn nested<T>(&mut self,
                                                    rule: impl FnOnce(&mut Self) -> ParseResult<T>)
                                                    -> ParseResult<T> {
        if self.depth >= MAX_NESTING {
            return Err(ParseError::too_much_nesting(self.peek()));
        }

        self.depth += 1;
        let result = rule(self);
        self.depth -= 1;
        result
    }

    /// Passes an error to the reporter.
    pub(in crate::interpreter::parser) fn report(&mut self, error: &ParseError) {
        tracing::debug!(line = error.line(), %error, "syntax error");
        self.reporter.report(error.line(), &error.message());
    }

    /// Discards tokens until the start of the next statement.
    ///
    /// Stops right after a `;`, in front of a keyword that begins a
    /// declaration or statement, or at the end of input. Always consumes at
    /// least one token unless already at the end.
    pub(in crate::interpreter::parser) fn synchronize(&mut self) {
        self.advance();

        while !self.is_at_end() {
            if self.previous().kind == TokenKind::Semicolon || self.peek().kind.starts_statement() {
                break;
            }
            self.advance();
        }

        tracing::trace!(line = self.peek().line, "resynchronized");
    }

    pub(in crate::interpreter::parser) fn is_at_end(&self) -> bool {
        self.peek().kind == TokenKind::Eof
    }

    pub(in crate::interpreter::parser) fn peek(&self) -> &Token {
        self.tokens.get(self.current).unwrap_or(&self.end)
    }

    pub(in crate::interpreter::parser) fn previous(&self) -> &Token {
        self.current
            .checked_sub(1)
            .and_then(|index| self.tokens.get(index))
            .unwrap_or(&self.end)
    }

    /// Consumes the current token and returns it.
    pub(in crate::interpreter::parser) fn advance(&mut self) -> Token {
        if !self.is_at_end() {
            self.current += 1;
        }
        self.previous().clone()
    }

    /// Returns `true` if the current token has the given kind. Never matches
    /// at the end of input.
    pub(in crate::interpreter::parser) fn check(&self, kind: TokenKind) -> bool {
        !self.is_at_end() && self.peek().kind == kind
    }

    /// Consumes the current token if it has any of the given kinds.
    pub(in crate::interpreter::parser) fn match_kinds(&mut self, kinds: &[TokenKind]) -> bool {
        if kinds.iter().any(|&kind| self.check(kind)) {
            self.advance();
            return true;
        }
        false
    }

    /// Consumes a token of the given kind or fails with `message`.
    pub(in crate::interpreter::parser) fn consume(&mut self,
                                                  kind: TokenKind,
                                                  message: &'static str)
                                                  -> ParseResult<Token> {
        if self.check(kind) {
            return Ok(self.advance());
        }
        Err(ParseError::expected(self.peek(), message))
    }
}

/// Parses `tokens` into a program, reporting syntax errors to `reporter`.
///
/// Shorthand for `Parser::new(tokens, reporter).parse()`.
pub fn parse(tokens: &[Token], reporter: &mut dyn Reporter) -> Vec<Stmt> {
    Parser::new(tokens, reporter).parse()
}
