use crate::ast::{Token, TokenKind};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents the syntax errors the parser raises.
///
/// Errors record where the parser was standing: the offending token's line
/// and lexeme, or `at_end` when it ran into the end-of-input sentinel.
pub enum ParseError {
    /// A specific token was required but something else was found.
    Expected {
        /// What was expected, e.g. `Expect ';' after value.`
        message: &'static str,
        /// The lexeme that was found instead.
        lexeme:  String,
        /// The source line where the error occurred.
        line:    usize,
        /// Whether the parser had reached the end of input.
        at_end:  bool,
    },
    /// No expression can start with the current token.
    ExpectedExpression {
        /// The lexeme that was found instead.
        lexeme: String,
        /// The source line where the error occurred.
        line:   usize,
        /// Whether the parser had reached the end of input.
        at_end: bool,
    },
    /// Statements or expressions nest deeper than the parser allows.
    TooMuchNesting {
        /// The lexeme where the limit was hit.
        lexeme: String,
        /// The source line where the error occurred.
        line:   usize,
        /// Whether the parser had reached the end of input.
        at_end: bool,
    },
    /// The left-hand side of `=` is not a variable.
    ///
    /// Reported without unwinding: the parser keeps the already parsed left
    /// expression and carries on.
    InvalidAssignmentTarget {
        /// The line of the `=` token.
        line: usize,
    },
}

impl ParseError {
    /// Builds an `Expected` error pointing at `token`.
    #[must_use]
    pub fn expected(token: &Token, message: &'static str) -> Self {
        Self::Expected { message,
                         lexeme: token.lexeme.clone(),
                         line: token.line,
                         at_end: token.kind == TokenKind::Eof }
    }

    /// Builds an `ExpectedExpression` error pointing at `token`.
    #[must_use]
    pub fn expected_expression(token: &Token) -> Self {
        Self::ExpectedExpression { lexeme: token.lexeme.clone(),
                                   line:   token.line,
                                   at_end: token.kind == TokenKind::Eof, }
    }

    /// Builds a `TooMuchNesting` error pointing at `token`.
    #[must_use]
    pub fn too_much_nesting(token: &Token) -> Self {
        Self::TooMuchNesting { lexeme: token.lexeme.clone(),
                               line:   token.line,
                               at_end: token.kind == TokenKind::Eof, }
    }

    /// The source line where the error occurred.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Expected { line, .. }
            | Self::ExpectedExpression { line, .. }
            | Self::TooMuchNesting { line, .. }
            | Self::InvalidAssignmentTarget { line } => *line,
        }
    }

    /// The diagnostic text without the line number, e.g.
    /// `at ')': Expect expression.`
    ///
    /// # Example
    /// ```
    /// use raft::{
    ///     ast::{Token, TokenKind},
    ///     error::ParseError,
    /// };
    ///
    /// let error = ParseError::expected(&Token::eof(2), "Expect ';' after value.");
    /// assert_eq!(error.message(), "at end: Expect ';' after value.");
    /// assert_eq!(error.line(), 2);
    /// ```
    #[must_use]
    pub fn message(&self) -> String {
        let (location, message) = match self {
            Self::Expected { message,
                             lexeme,
                             at_end,
                             .. } => (location(lexeme, *at_end), *message),
            Self::ExpectedExpression { lexeme, at_end, .. } => {
                (location(lexeme, *at_end), "Expect expression.")
            },
            Self::TooMuchNesting { lexeme, at_end, .. } => {
                (location(lexeme, *at_end), "Too much nesting.")
            },
            Self::InvalidAssignmentTarget { .. } => {
                (location("=", false), "Invalid assignment target.")
            },
        };
        format!("{location}: {message}")
    }
}

fn location(lexeme: &str, at_end: bool) -> String {
    if at_end {
        "at end".to_string()
    } else {
        format!("at '{lexeme}'")
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error on line {}: {}", self.line(), self.message())
    }
}

impl std::error::Error for ParseError {}
