use std::{
    fmt,
    time::{SystemTime, UNIX_EPOCH},
};

use crate::interpreter::{
    evaluator::core::{Context, EvalResult},
    value::core::Value,
};

/// Something a program can invoke.
///
/// The evaluator checks `arity` against the number of arguments before it
/// calls `call`. The provided methods describe an inert callable that takes
/// no arguments and returns `nil`; real callables override both.
pub trait Callable: fmt::Debug {
    /// The number of arguments `call` expects.
    fn arity(&self) -> usize {
        0
    }

    /// Invokes the callable.
    ///
    /// `arguments` always has exactly `arity()` elements when called through
    /// [`Context::call_value`].
    ///
    /// # Errors
    /// Implementations return a `RuntimeError` when the call cannot complete.
    fn call(&self, context: &mut Context, arguments: Vec<Value>) -> EvalResult<Value> {
        let _ = (context, arguments);
        Ok(Value::Null)
    }
}

/// Signature of a function implemented in Rust.
pub type NativeFn = fn(&mut Context, &[Value]) -> EvalResult<Value>;

/// A callable backed by a Rust function.
///
/// # Example
/// ```
/// use std::rc::Rc;
///
/// use raft::interpreter::{
///     evaluator::core::Context,
///     value::{
///         callable::{Callable, NativeFunction},
///         core::Value,
///     },
/// };
///
/// let double = NativeFunction::new("double", 1, |_, args| {
///     Ok(Value::Number(args[0].as_number().unwrap_or(0.0) * 2.0))
/// });
/// assert_eq!(double.arity(), 1);
///
/// let mut context = Context::new();
/// let result = context.call_value(&Value::Callable(Rc::new(double)), vec![Value::Number(4.0)], 1);
/// assert_eq!(result.unwrap(), Value::Number(8.0));
/// ```
pub struct NativeFunction {
    name:     &'static str,
    arity:    usize,
    function: NativeFn,
}

impl NativeFunction {
    /// Wraps a Rust function as a callable.
    #[must_use]
    pub const fn new(name: &'static str, arity: usize, function: NativeFn) -> Self {
        Self { name,
               arity,
               function }
    }

    /// The name the function is bound to in the global scope.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Debug for NativeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<native fn {}>", self.name)
    }
}

impl Callable for NativeFunction {
    fn arity(&self) -> usize {
        self.arity
    }

    fn call(&self, context: &mut Context, arguments: Vec<Value>) -> EvalResult<Value> {
        (self.function)(context, &arguments)
    }
}

/// Seconds since the Unix epoch, as a number.
#[allow(clippy::unnecessary_wraps)]
pub fn clock(_: &mut Context, _: &[Value]) -> EvalResult<Value> {
    let seconds = SystemTime::now().duration_since(UNIX_EPOCH)
                                   .map_or(0.0, |elapsed| elapsed.as_secs_f64());
    Ok(Value::Number(seconds))
}

/// The native functions every fresh global scope starts with.
#[must_use]
pub fn natives() -> Vec<NativeFunction> {
    vec![NativeFunction::new("clock", 0, clock)]
}
