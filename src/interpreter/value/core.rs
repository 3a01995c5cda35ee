use std::{cell::RefCell, fmt, rc::Rc};

use rustc_hash::FxHashSet;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::function::core::Builtin,
        value::{
            array::ArrayValue,
            function::FunctionValue,
            hash::{HashKey, HashValue},
        },
    },
};

/// Represents a runtime value in the interpreter.
///
/// This enum models every kind of value a program can produce, bind, pass or
/// return. Heap kinds are reference counted: copying a `Value` copies the
/// handle, never the contents, so two bindings of one array observe each
/// other's mutations.
#[derive(Debug, Clone)]
pub enum Value {
    /// The absence of a value. Falsy.
    Null,
    /// A boolean value (`true` or `false`).
    /// Produced by comparison operators and `!`.
    Boolean(bool),
    /// A 64 bit signed integer.
    Integer(i64),
    /// An immutable string. Each evaluation of a literal or concatenation
    /// creates a new instance.
    String(Rc<str>),
    /// A growable array, mutated in place by builtins such as `push`.
    Array(Rc<RefCell<ArrayValue>>),
    /// A map from integer, boolean or string keys to values.
    Hash(Rc<HashValue>),
    /// A user-defined closure.
    Function(Rc<FunctionValue>),
    /// A native function from the builtin table.
    Builtin(Builtin),
    /// A runtime error that reached the host.
    Error(RuntimeError),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
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

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::Array(Rc::new(RefCell::new(ArrayValue::from_vec(v))))
    }
}

impl From<RuntimeError> for Value {
    fn from(e: RuntimeError) -> Self {
        Self::Error(e)
    }
}

impl Value {
    /// The upper-case kind name used in error messages.
    ///
    /// # Example
    /// ```
    /// use stargust::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Integer(1).type_name(), "INTEGER");
    /// assert_eq!(Value::from("hi").type_name(), "STRING");
    /// assert_eq!(Value::Null.type_name(), "NULL");
    /// ```
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "NULL",
            Self::Boolean(_) => "BOOLEAN",
            Self::Integer(_) => "INTEGER",
            Self::String(_) => "STRING",
            Self::Array(_) => "ARRAY",
            Self::Hash(_) => "HASH",
            Self::Function(_) => "FUNCTION",
            Self::Builtin(_) => "BUILTIN",
            Self::Error(_) => "ERROR",
        }
    }

    /// Truthiness used by `if` and `!`.
    ///
    /// `null` and `false` are falsy; every other value, including `0` and
    /// the empty string, is truthy.
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Self::Null | Self::Boolean(false))
    }

    /// The key this value addresses in a map, or `None` if it cannot be a key.
    ///
    /// # Example
    /// ```
    /// use stargust::interpreter::value::{core::Value, hash::HashKey};
    ///
    /// assert_eq!(Value::Integer(3).hash_key(), Some(HashKey::Integer(3)));
    /// assert_eq!(Value::from("a").hash_key(), Value::from("a").hash_key());
    /// assert_eq!(Value::Null.hash_key(), None);
    /// ```
    #[must_use]
    pub fn hash_key(&self) -> Option<HashKey> {
        match self {
            Self::Integer(n) => Some(HashKey::Integer(*n)),
            Self::Boolean(b) => Some(HashKey::Boolean(*b)),
            Self::String(s) => Some(HashKey::String(Rc::clone(s))),
            Self::Null
            | Self::Array(_)
            | Self::Hash(_)
            | Self::Function(_)
            | Self::Builtin(_)
            | Self::Error(_) => None,
        }
    }

    /// Identity comparison used by `==` and `!=` on non-integers.
    ///
    /// `null` and booleans compare by value since there is only one of each.
    /// Heap values are equal only when both handles point at the same
    /// allocation. Builtins are equal when they are the same table entry.
    /// Values of different kinds are never equal.
    ///
    /// # Example
    /// ```
    /// use stargust::interpreter::value::core::Value;
    ///
    /// let s = Value::from("a");
    ///
    /// assert!(s.same_instance(&s.clone()));
    /// assert!(!s.same_instance(&Value::from("a")));
    /// ```
    #[must_use]
    pub fn same_instance(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::String(a), Self::String(b)) => Rc::ptr_eq(a, b),
            (Self::Array(a), Self::Array(b)) => Rc::ptr_eq(a, b),
            (Self::Hash(a), Self::Hash(b)) => Rc::ptr_eq(a, b),
            (Self::Function(a), Self::Function(b)) => Rc::ptr_eq(a, b),
            (Self::Builtin(a), Self::Builtin(b)) => a.name() == b.name(),
            _ => false,
        }
    }

    /// Returns `true` for [`Value::Error`].
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

/// Arrays whose rendering is in progress, by allocation.
type OpenArrays = FxHashSet<*const RefCell<ArrayValue>>;

/// Writes the canonical rendering of `value`.
///
/// An array reached again while it is still being written renders as
/// `[...]`, so arrays that contain themselves terminate.
fn write_value(f: &mut fmt::Formatter<'_>, value: &Value, open: &mut OpenArrays) -> fmt::Result {
    match value {
        Value::Null => write!(f, "null"),
        Value::Boolean(b) => write!(f, "{b}"),
        Value::Integer(n) => write!(f, "{n}"),
        Value::String(s) => write!(f, "{s}"),
        Value::Array(array) => {
            let id = Rc::as_ptr(array);
            if !open.insert(id) {
                return write!(f, "[...]");
            }

            write!(f, "[")?;
            for (i, element) in array.borrow().elements().iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write_value(f, element, open)?;
            }
            open.remove(&id);
            write!(f, "]")
        },
        Value::Hash(map) => {
            write!(f, "{{")?;
            for (i, pair) in map.pairs().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write_value(f, &pair.key, open)?;
                write!(f, ": ")?;
                write_value(f, &pair.value, open)?;
            }
            write!(f, "}}")
        },
        Value::Function(function) => write!(f, "{function}"),
        Value::Builtin(_) => write!(f, "builtin function"),
        Value::Error(error) => write!(f, "ERROR: {error}"),
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_value(f, self, &mut OpenArrays::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truthiness() {
        assert!(!Value::Null.is_truthy());
        assert!(!Value::Boolean(false).is_truthy());
        assert!(Value::Integer(0).is_truthy());
        assert!(Value::from("").is_truthy());
        assert!(Value::from(Vec::new()).is_truthy());
    }

    #[test]
    fn rendering() {
        let array = Value::from(vec![Value::Integer(1), Value::from("two"), Value::Null]);

        assert_eq!(array.to_string(), "[1, two, null]");
        assert_eq!(Value::Boolean(true).to_string(), "true");
        assert_eq!(Value::Error(RuntimeError::DivisionByZero { line: 1 }).to_string(),
                   "ERROR: division by zero");
    }

    #[test]
    fn arrays_compare_by_allocation() {
        let a = Value::from(vec![Value::Integer(1)]);
        let b = Value::from(vec![Value::Integer(1)]);

        assert!(a.same_instance(&a.clone()));
        assert!(!a.same_instance(&b));
        assert!(!Value::Integer(1).same_instance(&Value::Boolean(true)));
    }

    #[test]
    fn self_containing_array_renders_once() {
        let array = Value::from(vec![Value::Integer(1)]);
        let Value::Array(inner) = &array else { unreachable!() };
        inner.borrow_mut().push(array.clone());

        assert_eq!(array.to_string(), "[1, [...]]");
    }

    #[test]
    fn shared_array_without_cycle_renders_fully() {
        let shared = Value::from(vec![Value::Integer(7)]);
        let outer = Value::from(vec![shared.clone(), shared]);

        assert_eq!(outer.to_string(), "[[7], [7]]");
    }
}
