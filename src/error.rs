/// The diagnostics sink.
///
/// Defines the `Reporter` trait the scanner and parser report through, along
/// with a collecting implementation used by the library and the tests and a
/// printing implementation used by the command line.
pub mod diagnostics;
/// Parsing errors.
///
/// Defines the syntax errors raised while descending through the grammar.
/// They travel up to the nearest statement boundary, where the parser reports
/// them and resynchronizes.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during execution, such as type
/// mismatches on operators and reads of undefined variables.
pub mod runtime_error;
/// Scanning errors.
///
/// Unexpected characters and unterminated strings found while turning source
/// text into tokens.
pub mod scan_error;

pub use diagnostics::{Diagnostic, Diagnostics, Reporter, StderrReporter};
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
pub use scan_error::ScanError;

/// Why running a program failed.
#[derive(Debug)]
pub enum Error {
    /// The source had scan or parse errors; nothing was executed.
    Syntax(Diagnostics),
    /// Execution stopped at a runtime error.
    Runtime(RuntimeError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Syntax(diagnostics) => write!(f, "{diagnostics}"),
            Self::Runtime(error) => write!(f, "{error}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Syntax(diagnostics) => Some(diagnostics),
            Self::Runtime(error) => Some(error),
        }
    }
}

impl From<Diagnostics> for Error {
    fn from(diagnostics: Diagnostics) -> Self {
        Self::Syntax(diagnostics)
    }
}

impl From<RuntimeError> for Error {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}
