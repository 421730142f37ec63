use logos::Logos;

use crate::{
    ast::{Literal, Token, TokenKind},
    error::{Reporter, ScanError},
};

/// The raw lexemes recognized in source text.
///
/// This is the `logos` view of the language. [`scan`] turns each lexeme into
/// a [`Token`], attaching the source line and literal payload.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
#[logos(skip r"[ \t\r\f]+")]
enum Lexeme {
    #[token("(")]
    LeftParen,
    #[token(")")]
    RightParen,
    #[token("{")]
    LeftBrace,
    #[token("}")]
    RightBrace,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token("-")]
    Minus,
    #[token("+")]
    Plus,
    #[token(";")]
    Semicolon,
    #[token("/")]
    Slash,
    #[token("*")]
    Star,
    #[token("!")]
    Bang,
    #[token("!=")]
    BangEqual,
    #[token("=")]
    Equal,
    #[token("==")]
    EqualEqual,
    #[token(">")]
    Greater,
    #[token(">=")]
    GreaterEqual,
    #[token("<")]
    Less,
    #[token("<=")]
    LessEqual,

    /// Numeric literals such as `12` or `3.25`.
    #[regex(r"[0-9]+(\.[0-9]+)?", |lex| lex.slice().parse::<f64>().ok())]
    Number(f64),
    /// String literals. May span lines.
    #[regex(r#""[^"]*""#, string_contents, allow_greedy = true)]
    String(String),
    /// An opening quote that is never closed. Runs to the end of input.
    #[regex(r#""[^"]*"#, |lex| {
        count_newlines(lex);
    }, allow_greedy = true)]
    UnterminatedString,
    /// Identifiers; keywords take precedence over this pattern.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Identifier,

    #[token("and")]
    And,
    #[token("class")]
    Class,
    #[token("else")]
    Else,
    #[token("false")]
    False,
    #[token("fun")]
    Fun,
    #[token("for")]
    For,
    #[token("if")]
    If,
    #[token("nil")]
    Nil,
    #[token("or")]
    Or,
    #[token("print")]
    Print,
    #[token("return")]
    Return,
    #[token("super")]
    Super,
    #[token("this")]
    This,
    #[token("true")]
    True,
    #[token("var")]
    Var,
    #[token("while")]
    While,

    /// `// Comments.`
    #[regex(r"//[^\n]*", logos::skip, allow_greedy = true)]
    Comment,
    /// Line breaks only advance the line counter.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Advances the line counter past the newlines inside the current slice.
fn count_newlines(lex: &mut logos::Lexer<Lexeme>) {
    lex.extras.line += lex.slice().chars().filter(|&c| c == '\n').count();
}

/// Strips the quotes from a string literal and accounts for its line breaks.
fn string_contents(lex: &mut logos::Lexer<Lexeme>) -> String {
    count_newlines(lex);
    let slice = lex.slice();
    slice[1..slice.len() - 1].to_string()
}

impl Lexeme {
    /// The token kind this lexeme produces. `None` for lexemes that are
    /// errors rather than tokens.
    const fn kind(&self) -> Option<TokenKind> {
        Some(match self {
            Self::LeftParen => TokenKind::LeftParen,
            Self::RightParen => TokenKind::RightParen,
            Self::LeftBrace => TokenKind::LeftBrace,
            Self::RightBrace => TokenKind::RightBrace,
            Self::Comma => TokenKind::Comma,
            Self::Dot => TokenKind::Dot,
            Self::Minus => TokenKind::Minus,
            Self::Plus => TokenKind::Plus,
            Self::Semicolon => TokenKind::Semicolon,
            Self::Slash => TokenKind::Slash,
            Self::Star => TokenKind::Star,
            Self::Bang => TokenKind::Bang,
            Self::BangEqual => TokenKind::BangEqual,
            Self::Equal => TokenKind::Equal,
            Self::EqualEqual => TokenKind::EqualEqual,
            Self::Greater => TokenKind::Greater,
            Self::GreaterEqual => TokenKind::GreaterEqual,
            Self::Less => TokenKind::Less,
            Self::LessEqual => TokenKind::LessEqual,
            Self::Number(_) => TokenKind::Number,
            Self::String(_) => TokenKind::String,
            Self::Identifier => TokenKind::Identifier,
            Self::And => TokenKind::And,
            Self::Class => TokenKind::Class,
            Self::Else => TokenKind::Else,
            Self::False => TokenKind::False,
            Self::Fun => TokenKind::Fun,
            Self::For => TokenKind::For,
            Self::If => TokenKind::If,
            Self::Nil => TokenKind::Nil,
            Self::Or => TokenKind::Or,
            Self::Print => TokenKind::Print,
            Self::Return => TokenKind::Return,
            Self::Super => TokenKind::Super,
            Self::This => TokenKind::This,
            Self::True => TokenKind::True,
            Self::Var => TokenKind::Var,
            Self::While => TokenKind::While,
            Self::UnterminatedString | Self::Comment | Self::NewLine => return None,
        })
    }
}

/// Turns source text into the token sequence the parser consumes.
///
/// Whitespace and `//` comments are dropped. Unexpected characters and
/// unterminated strings are reported to `reporter` and skipped, so the result
/// is always usable. The last token is always `Eof`.
///
/// # Parameters
/// - `source`: The program text.
/// - `reporter`: Receives one diagnostic per scan error.
///
/// # Returns
/// The tokens in source order, terminated by `TokenKind::Eof`.
///
/// # Example
/// ```
/// use raft::{
///     ast::{Literal, TokenKind},
///     error::Diagnostics,
///     interpreter::lexer::scan,
/// };
///
/// let mut diagnostics = Diagnostics::default();
/// let tokens = scan("var x = 1.5;\nprint x;", &mut diagnostics);
///
/// assert!(diagnostics.is_empty());
/// assert_eq!(tokens[0].kind, TokenKind::Var);
/// assert_eq!(tokens[3].literal, Some(Literal::Number(1.5)));
/// assert_eq!(tokens[5].line, 2);
/// assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
/// ```
pub fn scan(source: &str, reporter: &mut dyn Reporter) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut lexer = Lexeme::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(lexeme) = lexer.next() {
        let slice = lexer.slice();
        let line = lexer.extras.line;

        let lexeme = match lexeme {
            Ok(lexeme) => lexeme,
            Err(()) => {
                report(reporter,
                       &ScanError::UnexpectedCharacter { text: slice.to_string(),
                                                         line });
                continue;
            },
        };

        let Some(kind) = lexeme.kind() else {
            report(reporter, &ScanError::UnterminatedString { line });
            continue;
        };

        let token = match lexeme {
            Lexeme::Number(n) => Token::with_literal(kind, slice, Literal::Number(n), line),
            Lexeme::String(s) => Token::with_literal(kind, slice, Literal::String(s), line),
            _ => Token::new(kind, slice, line),
        };
        tokens.push(token);
    }

    tokens.push(Token::eof(lexer.extras.line));
    tokens
}

fn report(reporter: &mut dyn Reporter, error: &ScanError) {
    tracing::debug!(line = error.line(), %error, "scan error");
    reporter.report(error.line(), &error.message());
}
