/// The `Callable` capability.
///
/// Declares the trait through which the evaluator invokes functions without
/// the value model knowing how they work, plus the native functions that are
/// installed into every global scope.
pub mod callable;

/// The runtime value type.
///
/// Defines `Value`, the closed union of strings, numbers, booleans, `nil` and
/// callables, together with the truthiness, equality and rendering rules the
/// rest of the interpreter depends on.
pub mod core;
