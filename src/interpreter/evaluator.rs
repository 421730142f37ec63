/// Binary operator evaluation.
///
/// Arithmetic, string concatenation, comparisons and the short-circuiting
/// logical operators.
pub mod binary;

/// The runtime context, statement execution and expression dispatch.
///
/// Also holds `call_value`, the single entry point through which callable
/// values are invoked.
pub mod core;

/// Lexical scopes: declaration, lookup and assignment of variables.
pub mod scope;

/// Unary operator evaluation (`-` and `!`).
pub mod unary;
