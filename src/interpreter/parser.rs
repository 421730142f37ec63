/// Expression levels from assignment down to multiplication.
///
/// Every binary level is a loop that folds operands onto a growing
/// left-hand tree, which makes the operators left-associative. Assignment
/// is the exception: it recurses, and validates its target.
pub mod binary;

/// Block parsing.
///
/// Parses the declarations between `{` and `}`.
pub mod block;

/// The parser type, its cursor helpers, and error recovery.
///
/// Holds the `Parser` struct, the entry points, and the token-level
/// primitives (`peek`, `advance`, `check`, `consume`) every rule is built
/// from, plus the resynchronization used after a syntax error.
pub mod core;

/// Declaration and statement parsing.
///
/// Implements `var` declarations, `print`, `if`, `while`, blocks and
/// expression statements, and rewrites `for` loops into `while` loops.
pub mod statement;

/// Unary operators and primary expressions.
pub mod unary;
