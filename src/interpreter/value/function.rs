use std::{fmt, rc::Rc};

use crate::{ast::FunctionLiteral, interpreter::scope::Scope};

/// A closure: a function literal paired with the scope it was created in.
///
/// The scope is captured by reference, so later changes to variables of the
/// defining scope are visible when the closure runs.
#[derive(Clone)]
pub struct FunctionValue {
    /// The literal this closure was created from.
    pub literal: Rc<FunctionLiteral>,
    /// The scope active when the literal was evaluated.
    pub scope:   Scope,
}

impl FunctionValue {
    /// Parameter names in declaration order.
    #[must_use]
    pub fn params(&self) -> &[String] {
        &self.literal.params
    }
}

// The captured scope may contain this very function, so it is left out.
impl fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionValue")
         .field("params", &self.literal.params)
         .field("line", &self.literal.line)
         .finish_non_exhaustive()
    }
}

impl fmt::Display for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fun({}) {{\n{}\n}}", self.literal.params.join(", "), self.literal.body)
    }
}
