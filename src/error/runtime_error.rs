#[derive(Debug)]
/// Represents all errors that can occur while executing a program.
pub enum RuntimeError {
    /// A unary operator needed a number.
    OperandMustBeNumber {
        /// The operator's lexeme.
        operator: String,
        /// The type name of the value that was found.
        found:    &'static str,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// An arithmetic or comparison operator needed two numbers.
    OperandsMustBeNumbers {
        /// The operator's lexeme.
        operator: String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// `+` needs two numbers or two strings.
    OperandsMustBeNumbersOrStrings {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Read or assigned a variable that was never declared.
    UndefinedVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Tried to invoke a value that is not callable.
    NotCallable {
        /// The type name of the value.
        found: &'static str,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A callable received the wrong number of arguments.
    ArgumentCountMismatch {
        /// The callable's arity.
        expected: usize,
        /// How many arguments were passed.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Writing program output failed.
    Io {
        /// The underlying error.
        source: std::io::Error,
        /// The source line where the error occurred.
        line:   usize,
    },
}

impl RuntimeError {
    /// The source line where the error occurred.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::OperandMustBeNumber { line, .. }
            | Self::OperandsMustBeNumbers { line, .. }
            | Self::OperandsMustBeNumbersOrStrings { line }
            | Self::UndefinedVariable { line, .. }
            | Self::NotCallable { line, .. }
            | Self::ArgumentCountMismatch { line, .. }
            | Self::Io { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OperandMustBeNumber { operator,
                                        found,
                                        line, } => write!(f,
                                                          "Error on line {line}: Operand of '{operator}' must be a number, found {found}."),
            Self::OperandsMustBeNumbers { operator, line } => {
                write!(f, "Error on line {line}: Operands of '{operator}' must be numbers.")
            },
            Self::OperandsMustBeNumbersOrStrings { line } => write!(f,
                                                                    "Error on line {line}: Operands must be two numbers or two strings."),
            Self::UndefinedVariable { name, line } => {
                write!(f, "Error on line {line}: Undefined variable '{name}'.")
            },
            Self::NotCallable { found, line } => {
                write!(f, "Error on line {line}: Can only call callables, found {found}.")
            },
            Self::ArgumentCountMismatch { expected,
                                          found,
                                          line, } => write!(f,
                                                            "Error on line {line}: Expected {expected} arguments but got {found}."),
            Self::Io { source, line } => {
                write!(f, "Error on line {line}: Failed to write output: {source}.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
