//! `ContextBuilder` for assembling a root context.

use std::rc::Rc;

use kon_value::EvalError;

use super::EvalContext;
use crate::config::EvalConfig;
use crate::function::Function;
use crate::variable::Variable;

/// Builder for the root context of an evaluation run.
///
/// Collects the globals and functions an embedding application exposes and
/// validates them together in [`build`](Self::build).
#[derive(Default)]
pub struct ContextBuilder {
    globals: Vec<(String, Rc<dyn Variable>)>,
    functions: Vec<(String, Rc<dyn Function>)>,
    config: EvalConfig,
}

impl ContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a global variable. A later global with the same name replaces it.
    #[must_use]
    pub fn global(mut self, name: impl Into<String>, variable: impl Variable + 'static) -> Self {
        self.globals.push((name.into(), Rc::new(variable)));
        self
    }

    /// Add a function. Duplicate names are reported by `build`.
    #[must_use]
    pub fn function(mut self, name: impl Into<String>, function: impl Function + 'static) -> Self {
        self.functions.push((name.into(), Rc::new(function)));
        self
    }

    #[must_use]
    pub fn config(mut self, config: EvalConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> Result<EvalContext, EvalError> {
        let mut ctx = EvalContext::with_config(self.config);
        {
            let mut globals = ctx.globals.borrow_mut();
            for (name, variable) in self.globals {
                globals.insert(name, variable);
            }
        }
        for (name, function) in self.functions {
            ctx.register_shared_function(name, function)?;
        }
        Ok(ctx)
    }
}
