use std::{fmt, rc::Rc};

use crate::{ast::Literal, interpreter::value::callable::Callable};

/// Represents a runtime value in the interpreter.
///
/// The union is closed. Truthiness, equality and rendering all match on it
/// exhaustively, so adding a variant does not compile until each of them
/// decides what the new variant means.
#[derive(Clone)]
pub enum Value {
    /// Immutable text.
    String(Rc<str>),
    /// A double precision floating-point number.
    Number(f64),
    /// `true` or `false`.
    Boolean(bool),
    /// The absence of a value, written `nil`.
    Null,
    /// Something that can be invoked with arguments.
    Callable(Rc<dyn Callable>),
}

impl Value {
    /// Maps a value to a boolean for use in conditions.
    ///
    /// Only `nil` and `false` are falsey; every other value, including `0` and
    /// the empty string, is truthy.
    ///
    /// # Example
    /// ```
    /// use raft::interpreter::value::core::Value;
    ///
    /// assert!(!Value::Null.is_truthy());
    /// assert!(!Value::Boolean(false).is_truthy());
    /// assert!(Value::Number(0.0).is_truthy());
    /// assert!(Value::from("").is_truthy());
    /// ```
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Boolean(b) => *b,
            Self::String(_) | Self::Number(_) | Self::Callable(_) => true,
        }
    }

    /// Compares two values without any implicit conversion.
    ///
    /// `nil` is only equal to `nil`. Otherwise both values must have the same
    /// variant: numbers compare by value (a `NaN` is equal to itself so that
    /// equality stays reflexive), strings by content, booleans by value and
    /// callables by identity.
    ///
    /// # Example
    /// ```
    /// use raft::interpreter::value::core::Value;
    ///
    /// assert!(Value::Null.is_equal(&Value::Null));
    /// assert!(!Value::Null.is_equal(&Value::Boolean(false)));
    /// assert!(!Value::Number(1.0).is_equal(&Value::from("1")));
    /// assert!(Value::from("abc").is_equal(&Value::from("abc")));
    /// ```
    #[must_use]
    pub fn is_equal(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Null, _) | (_, Self::Null) => false,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::Callable(a), Self::Callable(b)) => Rc::ptr_eq(a, b),
            (Self::String(_) | Self::Number(_) | Self::Boolean(_) | Self::Callable(_), _) => false,
        }
    }

    /// Returns the user-facing name of the value's type.
    ///
    /// Used in runtime error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::String(_) => "string",
            Self::Number(_) => "number",
            Self::Boolean(_) => "boolean",
            Self::Null => "nil",
            Self::Callable(_) => "callable",
        }
    }

    /// Returns the number inside a `Number` value.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.is_equal(other)
    }
}

impl fmt::Display for Value {
    /// Renders the value the way `print` shows it.
    ///
    /// Numbers use their shortest round-trip decimal form, so `3.0` prints as
    /// `3` and `2.5` as `2.5`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Null => f.write_str("nil"),
            Self::Callable(_) => f.write_str("callable"),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => write!(f, "String({s:?})"),
            Self::Number(n) => write!(f, "Number({n:?})"),
            Self::Boolean(b) => write!(f, "Boolean({b})"),
            Self::Null => f.write_str("Null"),
            Self::Callable(c) => write!(f, "Callable({c:?})"),
        }
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(Rc::from(v))
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(Rc::from(v))
    }
}

impl From<&Literal> for Value {
    fn from(literal: &Literal) -> Self {
        match literal {
            Literal::Number(n) => Self::Number(*n),
            Literal::String(s) => Self::from(s.as_str()),
        }
    }
}
