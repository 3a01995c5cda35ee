use std::fmt;

use tracing::{debug, trace};

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{EvalResult, Evaluator, Unwind},
            function::{array, print, string},
        },
        output::OutputSink,
        scope::Scope,
        value::{core::Value, function::FunctionValue},
    },
};

/// Result type returned by builtin implementations.
pub type BuiltinResult = Result<Value, RuntimeError>;

/// Type alias for builtin function handlers.
///
/// A builtin receives a slice of evaluated argument values, the output sink
/// and the line number of the call. Argument count has already been checked
/// against the builtin's [`Arity`] when it runs.
type BuiltinFn = fn(&[Value], &OutputSink, usize) -> BuiltinResult;

/// Specifies the allowed number of arguments for a builtin.
///
/// - `Exact(n)` means the builtin must receive exactly `n` arguments.
/// - `Any` means the builtin accepts any number of arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    Any,
}

/// A native function from the builtin table.
///
/// Builtins are plain table entries, so copying one is free and two copies of
/// the same entry compare equal by name.
#[derive(Clone, Copy)]
pub struct Builtin {
    name:  &'static str,
    arity: Arity,
    func:  BuiltinFn,
}

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - an arity specification,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        static BUILTIN_TABLE: &[Builtin] = &[
            $(
                Builtin { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// Names of all builtins, in table order.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "len"     => { arity: Arity::Exact(1), func: string::len },
    "get"     => { arity: Arity::Exact(2), func: string::get },
    "first"   => { arity: Arity::Exact(1), func: array::first },
    "last"    => { arity: Arity::Exact(1), func: array::last },
    "push"    => { arity: Arity::Exact(2), func: array::push },
    "set"     => { arity: Arity::Exact(3), func: array::set },
    "sort"    => { arity: Arity::Exact(1), func: array::sort },
    "reverse" => { arity: Arity::Exact(1), func: array::reverse },
    "shuffle" => { arity: Arity::Exact(1), func: array::shuffle },
    "puts"    => { arity: Arity::Any, func: print::puts },
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity constraint.
    const fn check(self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == m,
            Self::Any => true,
        }
    }
}

impl Builtin {
    /// Finds the builtin called `name`.
    ///
    /// # Example
    /// ```
    /// use stargust::interpreter::evaluator::function::core::Builtin;
    ///
    /// assert_eq!(Builtin::lookup("len").map(|b| b.name()), Some("len"));
    /// assert!(Builtin::lookup("length").is_none());
    /// ```
    #[must_use]
    pub fn lookup(name: &str) -> Option<Self> {
        BUILTIN_TABLE.iter().find(|b| b.name == name).copied()
    }

    /// The name the builtin is called by.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The number of arguments the builtin takes.
    #[must_use]
    pub const fn arity(&self) -> Arity {
        self.arity
    }

    /// Runs the builtin after checking the argument count.
    ///
    /// # Errors
    /// `BuiltinArgumentCount` on a count mismatch, otherwise whatever the
    /// builtin reports for unsupported arguments.
    pub fn call(&self, args: &[Value], output: &OutputSink, line: usize) -> BuiltinResult {
        if !self.arity.check(args.len()) {
            let expected = match self.arity {
                Arity::Exact(n) => n,
                Arity::Any => args.len(),
            };
            return Err(RuntimeError::BuiltinArgumentCount { name: self.name,
                                                            expected,
                                                            found: args.len(),
                                                            line });
        }

        trace!(builtin = self.name, args = args.len(), line, "calling builtin");
        (self.func)(args, output, line)
    }
}

impl fmt::Debug for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builtin")
         .field("name", &self.name)
         .field("arity", &self.arity)
         .finish_non_exhaustive()
    }
}

impl Evaluator {
    /// Applies a callee to already evaluated arguments.
    ///
    /// Closures run in a new frame; builtins run directly.
    ///
    /// # Parameters
    /// - `callee`: The evaluated callee expression.
    /// - `arguments`: Evaluated argument values.
    /// - `line`: Line number of the call for error reporting.
    ///
    /// # Errors
    /// `NotAFunction` for callees that are neither closures nor builtins.
    pub fn apply(&mut self, callee: &Value, arguments: &[Value], line: usize) -> EvalResult<Value> {
        match callee {
            Value::Function(function) => self.call_function(function, arguments, line),
            Value::Builtin(builtin) => Ok(builtin.call(arguments, self.output(), line)?),
            other => Err(RuntimeError::NotAFunction { kind: other.type_name(),
                                                      line }.into()),
        }
    }

    /// Executes a closure.
    ///
    /// A new frame enclosing the captured scope receives the parameters,
    /// bound positionally. The body then runs in that frame. A `return`
    /// inside the body ends the call with its value; falling off the end
    /// yields the last statement's value, or `null`.
    ///
    /// # Errors
    /// - `ArgumentCountMismatch` if the argument count differs from the
    ///   parameter count.
    /// - `CallDepthExceeded` if a call-depth limit is configured and reached.
    fn call_function(&mut self,
                     function: &FunctionValue,
                     arguments: &[Value],
                     line: usize)
                     -> EvalResult<Value> {
        let params = function.params();
        if arguments.len() != params.len() {
            return Err(RuntimeError::ArgumentCountMismatch { expected: params.len(),
                                                             found: arguments.len(),
                                                             line }.into());
        }

        if let Some(limit) = self.max_call_depth()
           && self.depth() >= limit
        {
            return Err(RuntimeError::CallDepthExceeded { limit, line }.into());
        }

        let frame = Scope::enclosed(&function.scope);
        for (param, argument) in params.iter().zip(arguments) {
            frame.define(param.as_str(), argument.clone());
        }

        debug!(line, depth = self.depth() + 1, params = params.len(), "calling function");

        self.enter_call();
        let result = self.eval_block(&function.literal.body, &frame);
        self.leave_call();

        match result {
            Ok(value) => Ok(value.unwrap_or(Value::Null)),
            Err(Unwind::Return(value)) => Ok(value),
            Err(error @ Unwind::Error(_)) => Err(error),
        }
    }
}
