/// The evaluator module executes statements and computes values.
///
/// The evaluator walks the syntax tree, evaluates expressions, manages the
/// stack of lexical scopes and writes `print` output. It is also the only
/// place callable values are invoked.
///
/// # Responsibilities
/// - Executes statements in order and evaluates expressions.
/// - Declares, reads and assigns variables across nested scopes.
/// - Reports runtime errors such as operand type mismatches.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces the token sequence the
/// parser consumes, each token carrying its kind, lexeme, literal payload and
/// line number.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source lines.
/// - Handles number and string literals, identifiers, keywords and operators.
/// - Reports unexpected characters and unterminated strings.
pub mod lexer;
/// The parser module builds statements from tokens.
///
/// A recursive-descent parser with one level per precedence tier. Syntax
/// errors are reported through a `Reporter`, after which the parser skips to
/// the next statement boundary and keeps going.
///
/// # Responsibilities
/// - Converts tokens into `Expr` and `Stmt` trees.
/// - Reports every syntax error it can find in a single pass.
/// - Rewrites `for` loops into `while` loops.
pub mod parser;
/// The value module defines the runtime data types.
///
/// Declares `Value` and the `Callable` trait, and fixes the truthiness,
/// equality and string conversion rules of the language.
pub mod value;
