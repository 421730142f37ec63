/// Dispatch of binary operators to their handlers.
pub mod core;

/// Arithmetic: `+ - * /`.
///
/// `+` also concatenates two strings.
pub mod arithmetic;

/// Equality and relational comparisons.
pub mod comparison;

/// Short-circuiting `and` / `or`.
pub mod logic;
