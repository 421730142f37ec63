#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents the errors the scanner reports.
///
/// Scan errors never stop scanning; the offending text is skipped.
pub enum ScanError {
    /// A character that starts no token.
    UnexpectedCharacter {
        /// The unrecognized text.
        text: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A string literal with no closing quote.
    UnterminatedString {
        /// The line where the input ended.
        line: usize,
    },
}

impl ScanError {
    /// The source line where the error occurred.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { line, .. } | Self::UnterminatedString { line } => *line,
        }
    }

    /// The diagnostic text without the line number.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::UnexpectedCharacter { text, .. } => format!("at '{text}': Unexpected character."),
            Self::UnterminatedString { .. } => "at end: Unterminated string.".to_string(),
        }
    }
}

impl std::fmt::Display for ScanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error on line {}: {}", self.line(), self.message())
    }
}

impl std::error::Error for ScanError {}
