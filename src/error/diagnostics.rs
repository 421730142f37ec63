use std::fmt;

/// Receives the errors found while scanning and parsing.
///
/// The scanner and parser report through this trait instead of printing, so
/// each run decides where diagnostics go and independent runs never share
/// state.
pub trait Reporter {
    /// Records one error at a source line.
    fn report(&mut self, line: usize, message: &str);
}

/// One reported error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// The source line the error refers to.
    pub line:    usize,
    /// What went wrong.
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[line {}] Error {}", self.line, self.message)
    }
}

/// A `Reporter` that keeps every diagnostic in order.
///
/// # Example
/// ```
/// use raft::error::{Diagnostics, Reporter};
///
/// let mut diagnostics = Diagnostics::default();
/// diagnostics.report(3, "at ';': Expect expression.");
///
/// assert_eq!(diagnostics.len(), 1);
/// assert_eq!(diagnostics.to_string(), "[line 3] Error at ';': Expect expression.");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Returns `true` when nothing has been reported.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The number of reported errors.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterates over the diagnostics in the order they were reported.
    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.entries.iter()
    }
}

impl Reporter for Diagnostics {
    fn report(&mut self, line: usize, message: &str) {
        self.entries.push(Diagnostic { line,
                                       message: message.to_string() });
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type IntoIter = std::slice::Iter<'a, Diagnostic>;
    type Item = &'a Diagnostic;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, diagnostic) in self.into_iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{diagnostic}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Diagnostics {}

/// A `Reporter` that prints each diagnostic to standard error as it arrives.
#[derive(Debug, Default)]
pub struct StderrReporter {
    reported: usize,
}

impl StderrReporter {
    /// Returns `true` once anything has been reported.
    #[must_use]
    pub const fn had_error(&self) -> bool {
        self.reported > 0
    }
}

impl Reporter for StderrReporter {
    fn report(&mut self, line: usize, message: &str) {
        self.reported += 1;
        eprintln!("[line {line}] Error {message}");
    }
}
