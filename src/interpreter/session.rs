use tracing::debug;

use crate::{
    error::ParseError,
    interpreter::{
        evaluator::core::Evaluator,
        output::SharedOutput,
        parser::parse,
        scope::Scope,
        value::core::Value,
    },
};

/// What happened to one input given to a [`Session`].
#[derive(Debug)]
pub enum Outcome {
    /// The input did not parse; nothing was evaluated.
    Diagnostics(Vec<ParseError>),
    /// The input was evaluated. `None` means there is nothing to show, for
    /// example after a declaration. Runtime errors arrive as
    /// [`Value::Error`].
    Completed(Option<Value>),
}

/// One global scope and one evaluator, shared by a sequence of inputs.
///
/// Each call to [`Session::run`] parses and evaluates one source text in the
/// same global scope, so declarations from earlier inputs stay visible. This
/// is what the interactive loop uses for each line.
///
/// # Example
/// ```
/// use stargust::interpreter::{
///     output::buffer_sink,
///     session::{Outcome, Session},
/// };
///
/// let mut session = Session::new(buffer_sink());
/// session.run("let double = fun(x) { x * 2 };");
///
/// match session.run("double(21)") {
///     Outcome::Completed(Some(value)) => assert_eq!(value.to_string(), "42"),
///     other => panic!("unexpected outcome: {other:?}"),
/// }
/// ```
#[derive(Debug)]
pub struct Session {
    scope:     Scope,
    evaluator: Evaluator,
}

impl Session {
    /// Creates a session with an empty global scope and an evaluator writing
    /// to `output`.
    #[must_use]
    pub fn new(output: SharedOutput) -> Self {
        Self::with_evaluator(Evaluator::new(output))
    }

    /// Creates a session around a configured evaluator.
    #[must_use]
    pub fn with_evaluator(evaluator: Evaluator) -> Self {
        Self { scope: Scope::new(),
               evaluator }
    }

    /// Parses and evaluates `source` in the session's global scope.
    ///
    /// A program with any diagnostic is never evaluated.
    pub fn run(&mut self, source: &str) -> Outcome {
        let (program, diagnostics) = parse(source);

        if !diagnostics.is_empty() {
            debug!(count = diagnostics.len(), "refusing to evaluate program with diagnostics");
            return Outcome::Diagnostics(diagnostics);
        }

        Outcome::Completed(self.evaluator.eval_program(&program, &self.scope))
    }

    /// The global scope.
    #[must_use]
    pub const fn scope(&self) -> &Scope {
        &self.scope
    }

    /// The sink `puts` writes to.
    #[must_use]
    pub const fn output(&self) -> &SharedOutput {
        self.evaluator.output()
    }
}
