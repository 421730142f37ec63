use std::fmt;

use crate::interpreter::value::core::Value;

/// Classifies a token.
///
/// The set is closed: the scanner never produces anything outside of it, and
/// the parser only ever accepts tokens by testing their kind.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Single-character punctuation.
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `,`
    Comma,
    /// `.`
    Dot,
    /// `-`
    Minus,
    /// `+`
    Plus,
    /// `;`
    Semicolon,
    /// `/`
    Slash,
    /// `*`
    Star,

    // One or two character operators.
    /// `!`
    Bang,
    /// `!=`
    BangEqual,
    /// `=`
    Equal,
    /// `==`
    EqualEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
    /// `<`
    Less,
    /// `<=`
    LessEqual,

    // Literals.
    /// Variable names such as `count`.
    Identifier,
    /// Double-quoted string literals.
    String,
    /// Decimal number literals such as `12` or `3.5`.
    Number,

    // Keywords.
    /// `and`
    And,
    /// `class`
    Class,
    /// `else`
    Else,
    /// `false`
    False,
    /// `fun`
    Fun,
    /// `for`
    For,
    /// `if`
    If,
    /// `nil`
    Nil,
    /// `or`
    Or,
    /// `print`
    Print,
    /// `return`
    Return,
    /// `super`
    Super,
    /// `this`
    This,
    /// `true`
    True,
    /// `var`
    Var,
    /// `while`
    While,

    /// End-of-input sentinel. Always the last token of a scanned program.
    Eof,
}

impl TokenKind {
    /// Returns `true` for the keywords that begin a declaration or statement.
    ///
    /// The parser stops discarding tokens in front of these after a syntax
    /// error.
    ///
    /// # Example
    /// ```
    /// use raft::ast::TokenKind;
    ///
    /// assert!(TokenKind::While.starts_statement());
    /// assert!(!TokenKind::Identifier.starts_statement());
    /// ```
    #[must_use]
    pub const fn starts_statement(self) -> bool {
        matches!(self,
                 Self::Class
                 | Self::Fun
                 | Self::Var
                 | Self::For
                 | Self::If
                 | Self::While
                 | Self::Print
                 | Self::Return)
    }
}

/// The literal payload a scanner attaches to number and string tokens.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// Parsed value of a `Number` token.
    Number(f64),
    /// Contents of a `String` token, without the surrounding quotes.
    String(String),
}

/// A classified lexeme together with its source position.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// What kind of token this is.
    pub kind:    TokenKind,
    /// The raw source text of the token. Empty for `Eof`.
    pub lexeme:  String,
    /// Literal payload for number and string tokens.
    pub literal: Option<Literal>,
    /// 1-based source line.
    pub line:    usize,
}

impl Token {
    /// Creates a token without a literal payload.
    ///
    /// # Example
    /// ```
    /// use raft::ast::{Token, TokenKind};
    ///
    /// let token = Token::new(TokenKind::Identifier, "x", 3);
    /// assert_eq!(token.lexeme, "x");
    /// assert!(token.literal.is_none());
    /// ```
    #[must_use]
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: usize) -> Self {
        Self { kind,
               lexeme: lexeme.into(),
               literal: None,
               line }
    }

    /// Creates a token carrying a literal payload.
    #[must_use]
    pub fn with_literal(kind: TokenKind,
                        lexeme: impl Into<String>,
                        literal: Literal,
                        line: usize)
                        -> Self {
        Self { kind,
               lexeme: lexeme.into(),
               literal: Some(literal),
               line }
    }

    /// Creates the end-of-input sentinel for the given line.
    #[must_use]
    pub fn eof(line: usize) -> Self {
        Self::new(TokenKind::Eof, "", line)
    }
}

/// An expression node.
///
/// Every node owns its children exclusively, so a parsed expression is a plain
/// tree with no sharing and no cycles. Operators keep their token so that the
/// evaluator can report errors at the operator's line.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A constant: number, string, `true`, `false` or `nil`.
    Literal(Value),
    /// A reference to a variable.
    Variable {
        /// The identifier token naming the variable.
        name: Token,
    },
    /// `name = value`.
    Assign {
        /// The identifier token naming the target variable.
        name:  Token,
        /// The assigned expression.
        value: Box<Self>,
    },
    /// A parenthesized expression. Has no runtime effect.
    Grouping(Box<Self>),
    /// `-right` or `!right`.
    Unary {
        /// The prefix operator token.
        operator: Token,
        /// The operand.
        right:    Box<Self>,
    },
    /// Arithmetic, comparison and equality operators.
    Binary {
        /// Left operand.
        left:     Box<Self>,
        /// The operator token.
        operator: Token,
        /// Right operand.
        right:    Box<Self>,
    },
    /// Short-circuiting `and` / `or`.
    Logical {
        /// Left operand, always evaluated.
        left:     Box<Self>,
        /// The `and` or `or` token.
        operator: Token,
        /// Right operand, evaluated only when the left one does not decide.
        right:    Box<Self>,
    },
}

impl Expr {
    /// Builds a binary node from its parts.
    #[must_use]
    pub fn binary(left: Self, operator: Token, right: Self) -> Self {
        Self::Binary { left: Box::new(left),
                       operator,
                       right: Box::new(right) }
    }

    /// Builds a logical node from its parts.
    #[must_use]
    pub fn logical(left: Self, operator: Token, right: Self) -> Self {
        Self::Logical { left: Box::new(left),
                        operator,
                        right: Box::new(right) }
    }
}

/// A statement node.
///
/// A program is a `Vec<Stmt>`. There is no `for` variant: `for` loops are
/// rewritten into `Block` and `While` by the parser.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// An expression evaluated for its side effects.
    Expression(Expr),
    /// `print value;`
    Print {
        /// The `print` keyword, which locates output errors.
        keyword: Token,
        /// The printed expression.
        value:   Expr,
    },
    /// `var name = initializer;`
    Var {
        /// The identifier token naming the variable.
        name:        Token,
        /// The initializer, if one was written.
        initializer: Option<Expr>,
    },
    /// `{ ... }`, which opens a new lexical scope.
    Block(Vec<Self>),
    /// `if (condition) then_branch else else_branch`
    If {
        /// The tested expression.
        condition:   Expr,
        /// Executed when the condition is truthy.
        then_branch: Box<Self>,
        /// Executed when the condition is falsey, if present.
        else_branch: Option<Box<Self>>,
    },
    /// `while (condition) body`
    While {
        /// Re-evaluated before every iteration.
        condition: Expr,
        /// The loop body.
        body:      Box<Self>,
    },
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(Value::String(s)) => write!(f, "\"{s}\""),
            Self::Literal(value) => write!(f, "{value}"),
            Self::Variable { name } => write!(f, "{}", name.lexeme),
            Self::Assign { name, value } => write!(f, "(= {} {value})", name.lexeme),
            Self::Grouping(expr) => write!(f, "(group {expr})"),
            Self::Unary { operator, right } => write!(f, "({} {right})", operator.lexeme),
            Self::Binary { left,
                           operator,
                           right, }
            | Self::Logical { left,
                              operator,
                              right, } => write!(f, "({} {left} {right})", operator.lexeme),
        }
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expression(expr) => write!(f, "(; {expr})"),
            Self::Print { value, .. } => write!(f, "(print {value})"),
            Self::Var { name,
                        initializer: Some(init), } => write!(f, "(var {} {init})", name.lexeme),
            Self::Var { name,
                        initializer: None, } => write!(f, "(var {})", name.lexeme),
            Self::Block(statements) => {
                write!(f, "(block")?;
                for statement in statements {
                    write!(f, " {statement}")?;
                }
                write!(f, ")")
            },
            Self::If { condition,
                       then_branch,
                       else_branch, } => {
                write!(f, "(if {condition} {then_branch}")?;
                if let Some(else_branch) = else_branch {
                    write!(f, " {else_branch}")?;
                }
                write!(f, ")")
            },
            Self::While { condition, body } => write!(f, "(while {condition} {body})"),
        }
    }
}
