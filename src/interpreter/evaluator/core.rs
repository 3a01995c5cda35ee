use std::rc::Rc;

use tracing::debug;

use crate::{
    ast::{Block, Expr, Program, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::function::core::Builtin,
        output::SharedOutput,
        scope::Scope,
        value::{core::Value, function::FunctionValue, hash::HashValue},
    },
};

/// Why evaluation of a block stopped early.
///
/// Both variants travel outward through `?` until something handles them:
/// a function boundary consumes `Return`, the program boundary consumes
/// both. Neither can ever be bound to a name or stored in a collection.
#[derive(Debug, Clone)]
pub enum Unwind {
    /// A `return` statement is unwinding to the nearest function boundary.
    Return(Value),
    /// A runtime error is unwinding to the host.
    Error(RuntimeError),
}

impl From<RuntimeError> for Unwind {
    fn from(error: RuntimeError) -> Self {
        Self::Error(error)
    }
}

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// [`Unwind`] describing why evaluation stopped.
pub type EvalResult<T> = Result<T, Unwind>;

/// The tree-walking evaluator.
///
/// The evaluator itself holds no variables; those live in the [`Scope`]
/// passed to [`Evaluator::eval_program`]. It owns the output sink used by
/// `puts` and the optional call-depth limit.
///
/// ## Usage
///
/// An `Evaluator` is created once and reused for every program of a session,
/// always with the same global scope, so that definitions persist between
/// inputs.
///
/// # Example
/// ```
/// use stargust::interpreter::{
///     evaluator::core::Evaluator, output::buffer_sink, parser::parse, scope::Scope,
/// };
///
/// let (program, _) = parse("let x = 2; x * 21");
/// let mut evaluator = Evaluator::new(buffer_sink());
///
/// let value = evaluator.eval_program(&program, &Scope::new()).unwrap();
/// assert_eq!(value.to_string(), "42");
/// ```
#[derive(Debug)]
pub struct Evaluator {
    output:         SharedOutput,
    max_call_depth: Option<usize>,
    depth:          usize,
}

impl Evaluator {
    /// Creates an evaluator writing `puts` output to `output`, with no limit
    /// on call depth.
    #[must_use]
    pub const fn new(output: SharedOutput) -> Self {
        Self { output,
               max_call_depth: None,
               depth: 0 }
    }

    /// Limits how deeply user functions may nest.
    ///
    /// A call that would exceed `limit` active calls fails with
    /// `RuntimeError::CallDepthExceeded` instead of overflowing the host
    /// stack.
    #[must_use]
    pub const fn with_max_call_depth(mut self, limit: usize) -> Self {
        self.max_call_depth = Some(limit);
        self
    }

    /// The sink `puts` writes to.
    #[must_use]
    pub const fn output(&self) -> &SharedOutput {
        &self.output
    }

    pub(crate) const fn max_call_depth(&self) -> Option<usize> {
        self.max_call_depth
    }

    pub(crate) const fn depth(&self) -> usize {
        self.depth
    }

    pub(crate) const fn enter_call(&mut self) {
        self.depth += 1;
    }

    pub(crate) const fn leave_call(&mut self) {
        self.depth -= 1;
    }

    /// Evaluates every statement of `program` in `scope`.
    ///
    /// A top-level `return` ends the program with its value. A runtime error
    /// ends the program with a [`Value::Error`].
    ///
    /// # Returns
    /// The value of the last statement, or `None` if that statement was a
    /// declaration or an assignment (or the program is empty).
    pub fn eval_program(&mut self, program: &Program, scope: &Scope) -> Option<Value> {
        let mut result = None;

        for statement in &program.statements {
            match self.eval_statement(statement, scope) {
                Ok(value) => result = value,
                Err(Unwind::Return(value)) => return Some(value),
                Err(Unwind::Error(error)) => {
                    debug!(%error, line = error.line(), "evaluation failed");
                    return Some(Value::Error(error));
                },
            }
        }

        result
    }

    /// Evaluates the statements of a block in `scope`.
    ///
    /// Blocks do not open a frame; `let` inside an `if` branch declares in the
    /// surrounding scope.
    ///
    /// # Returns
    /// The value of the last statement, or `None` when it produced none.
    /// A `return` or an error stops the block and propagates as [`Unwind`].
    pub fn eval_block(&mut self, block: &Block, scope: &Scope) -> EvalResult<Option<Value>> {
        let mut result = None;

        for statement in &block.statements {
            result = self.eval_statement(statement, scope)?;
        }

        Ok(result)
    }

    /// Evaluates a single statement.
    ///
    /// Handles declarations, assignments, returns and plain expression
    /// statements.
    ///
    /// # Returns
    /// `Some(Value)` for expression statements; `None` for declarations and
    /// assignments.
    ///
    /// # Errors
    /// - `AlreadyDeclared` when `let` names a variable of the innermost frame.
    /// - `NotDefined` when an assignment names a variable no frame holds.
    ///
    /// The right-hand side is evaluated before either check, so its errors
    /// take precedence.
    pub fn eval_statement(&mut self,
                          statement: &Statement,
                          scope: &Scope)
                          -> EvalResult<Option<Value>> {
        match statement {
            Statement::Let { name, value, line } => {
                let value = self.eval_expr(value, scope)?;

                if scope.contains_local(name) {
                    return Err(RuntimeError::AlreadyDeclared { name: name.clone(),
                                                               line: *line, }.into());
                }

                scope.define(name.as_str(), value);
                Ok(None)
            },
            Statement::Assign { name, value, line } => {
                let value = self.eval_expr(value, scope)?;

                if !scope.assign(name, value) {
                    return Err(RuntimeError::NotDefined { name: name.clone(),
                                                          line: *line, }.into());
                }

                Ok(None)
            },
            Statement::Return { value, .. } => {
                let value = self.eval_expr(value, scope)?;
                Err(Unwind::Return(value))
            },
            Statement::Expression { expr, .. } => Ok(Some(self.eval_expr(expr, scope)?)),
        }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. The evaluator
    /// dispatches on the expression variant. Operands are evaluated left to
    /// right, and the callee of a call is evaluated before its arguments.
    pub fn eval_expr(&mut self, expr: &Expr, scope: &Scope) -> EvalResult<Value> {
        match expr {
            Expr::Identifier { name, line } => Ok(Self::eval_identifier(name, *line, scope)?),
            Expr::Integer { value, .. } => Ok(Value::Integer(*value)),
            Expr::String { value, .. } => Ok(Value::from(value.as_str())),
            Expr::Boolean { value, .. } => Ok(Value::Boolean(*value)),
            Expr::Prefix { op, operand, line } => {
                let operand = self.eval_expr(operand, scope)?;
                Ok(Self::eval_prefix(*op, &operand, *line)?)
            },
            Expr::Infix { op,
                          left,
                          right,
                          line, } => {
                let left = self.eval_expr(left, scope)?;
                let right = self.eval_expr(right, scope)?;
                Ok(Self::eval_infix(*op, &left, &right, *line)?)
            },
            Expr::If { condition,
                       consequence,
                       alternative,
                       .. } => {
                let condition = self.eval_expr(condition, scope)?;
                let branch = if condition.is_truthy() {
                    Some(consequence)
                } else {
                    alternative.as_ref()
                };

                match branch {
                    Some(block) => Ok(self.eval_block(block, scope)?.unwrap_or(Value::Null)),
                    None => Ok(Value::Null),
                }
            },
            Expr::Function(literal) => {
                Ok(Value::Function(Rc::new(FunctionValue { literal: Rc::clone(literal),
                                                           scope:   scope.clone(), })))
            },
            Expr::Call { callee,
                         arguments,
                         line, } => {
                let callee = self.eval_expr(callee, scope)?;
                let arguments = self.eval_expressions(arguments, scope)?;
                self.apply(&callee, &arguments, *line)
            },
            Expr::Array { elements, .. } => Ok(Value::from(self.eval_expressions(elements, scope)?)),
            Expr::Index { collection,
                          index,
                          line, } => {
                let collection = self.eval_expr(collection, scope)?;
                let index = self.eval_expr(index, scope)?;
                Ok(Self::eval_index(&collection, &index, *line)?)
            },
            Expr::Hash { pairs, .. } => self.eval_hash(pairs, scope),
        }
    }

    /// Resolves a name: the scope chain first, then the builtin table.
    ///
    /// # Errors
    /// `UnknownIdentifier` if neither knows the name.
    pub fn eval_identifier(name: &str, line: usize, scope: &Scope) -> Result<Value, RuntimeError> {
        scope.get(name)
             .or_else(|| Builtin::lookup(name).map(Value::Builtin))
             .ok_or_else(|| RuntimeError::UnknownIdentifier { name: name.to_string(),
                                                              line })
    }

    /// Evaluates a list of expressions left to right, stopping at the first
    /// failure.
    pub fn eval_expressions(&mut self, exprs: &[Expr], scope: &Scope) -> EvalResult<Vec<Value>> {
        exprs.iter().map(|expr| self.eval_expr(expr, scope)).collect()
    }

    /// Evaluates a map literal.
    ///
    /// Each key is evaluated and checked before its value. Later pairs
    /// overwrite earlier ones with an equal key.
    ///
    /// # Errors
    /// `UnusableHashKey` for a key that is not an integer, boolean or string.
    fn eval_hash(&mut self, pairs: &[(Expr, Expr)], scope: &Scope) -> EvalResult<Value> {
        let mut map = HashValue::new();

        for (key_expr, value_expr) in pairs {
            let key = self.eval_expr(key_expr, scope)?;
            let hash_key =
                key.hash_key()
                   .ok_or_else(|| RuntimeError::UnusableHashKey { kind: key.type_name(),
                                                                  line: key_expr.line_number(), })?;
            let value = self.eval_expr(value_expr, scope)?;

            map.insert(hash_key, key, value);
        }

        Ok(Value::Hash(Rc::new(map)))
    }
}
