//! Evaluation context: variable scoping and the function registry.
//!
//! A context owns three tables:
//! - `globals`: variables provided by the embedding application
//! - `locals`: variables bound while evaluating the current unit
//! - `functions`: the free-function registry
//!
//! `globals` and `functions` live behind [`Shared`] handles, so every
//! context forked from a root sees the same tables. `locals` is a plain map
//! that [`EvalContext::fork`] copies; a child scope can never write into its
//! parent's locals.

mod builder;


use std::fmt;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use kon_value::{call_depth_exceeded, function_already_exists, EvalError, Value};

use crate::config::EvalConfig;
use crate::function::Function;
use crate::shared::Shared;
use crate::stack::ensure_sufficient_stack;
use crate::variable::Variable;

pub use builder::ContextBuilder;

type VariableTable = FxHashMap<String, Rc<dyn Variable>>;
type FunctionTable = FxHashMap<String, Rc<dyn Function>>;

/// Scoping and registry state threaded through evaluation.
pub struct EvalContext {
    globals: Shared<VariableTable>,
    functions: Shared<FunctionTable>,
    locals: VariableTable,
    config: EvalConfig,
    /// Nested function/member calls currently in progress.
    depth: usize,
}

impl EvalContext {
    /// Create an empty root context with the default configuration.
    pub fn new() -> Self {
        Self::with_config(EvalConfig::default())
    }

    pub fn with_config(config: EvalConfig) -> Self {
        EvalContext {
            globals: Shared::default(),
            functions: Shared::default(),
            locals: VariableTable::default(),
            config,
            depth: 0,
        }
    }

    pub fn builder() -> ContextBuilder {
        ContextBuilder::new()
    }

    #[inline]
    pub fn config(&self) -> &EvalConfig {
        &self.config
    }

    /// Number of function/member calls currently on the evaluation stack.
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Resolve a variable and read its value.
    ///
    /// Globals are consulted before locals: a global binding wins over a
    /// local binding of the same name.
    pub fn resolve_variable(&self, name: &str) -> Option<Value> {
        let variable = self
            .globals
            .borrow()
            .get(name)
            .cloned()
            .or_else(|| self.locals.get(name).cloned())?;
        Some(variable.value())
    }

    /// Look up a registered function.
    pub fn resolve_function(&self, name: &str) -> Option<Rc<dyn Function>> {
        self.functions.borrow().get(name).cloned()
    }

    #[inline]
    pub fn has_global(&self, name: &str) -> bool {
        self.globals.borrow().contains_key(name)
    }

    #[inline]
    pub fn has_local(&self, name: &str) -> bool {
        self.locals.contains_key(name)
    }

    /// Bind a local variable, replacing any previous local of that name.
    pub fn bind_local(&mut self, name: impl Into<String>, variable: impl Variable + 'static) {
        let name = name.into();
        tracing::trace!(%name, "bind local");
        self.locals.insert(name, Rc::new(variable));
    }

    /// Define a global variable, replacing any previous global of that name.
    ///
    /// The global table is shared, so the binding is visible from every
    /// context forked from the same root.
    pub fn define_global(&mut self, name: impl Into<String>, variable: impl Variable + 'static) {
        let name = name.into();
        tracing::trace!(%name, "define global");
        self.globals.borrow_mut().insert(name, Rc::new(variable));
    }

    /// Register a free function. Names are unique for the lifetime of the
    /// shared registry.
    pub fn register_function(
        &mut self,
        name: impl Into<String>,
        function: impl Function + 'static,
    ) -> Result<(), EvalError> {
        self.register_shared_function(name.into(), Rc::new(function))
    }

    pub(crate) fn register_shared_function(
        &mut self,
        name: String,
        function: Rc<dyn Function>,
    ) -> Result<(), EvalError> {
        let mut functions = self.functions.borrow_mut();
        if functions.contains_key(&name) {
            return Err(function_already_exists(&name));
        }
        tracing::debug!(%name, "register function");
        functions.insert(name, function);
        Ok(())
    }

    /// Create a child context for a nested scope.
    ///
    /// The child shares globals and functions with `self` and starts with a
    /// copy of the current locals. Later local bindings on either side stay
    /// on that side.
    #[must_use]
    pub fn fork(&self) -> Self {
        tracing::debug!(locals = self.locals.len(), depth = self.depth, "fork context");
        EvalContext {
            globals: self.globals.clone(),
            functions: self.functions.clone(),
            locals: self.locals.clone(),
            config: self.config,
            depth: self.depth,
        }
    }

    /// Whether `self` and `other` descend from the same root, i.e. see the
    /// same globals and functions.
    pub fn shares_tables_with(&self, other: &EvalContext) -> bool {
        self.globals.ptr_eq(&other.globals) && self.functions.ptr_eq(&other.functions)
    }

    /// Run `f` one call level deeper.
    ///
    /// Fails before running `f` when the configured depth cap is reached,
    /// and grows the native stack if it is running low.
    pub(crate) fn guarded_call<R>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<R, EvalError>,
    ) -> Result<R, EvalError> {
        let limit = self.config.max_call_depth;
        if self.depth >= limit {
            return Err(call_depth_exceeded(limit));
        }
        self.depth += 1;
        let result = ensure_sufficient_stack(|| f(self));
        self.depth -= 1;
        result
    }
}

impl Default for EvalContext {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EvalContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut globals: Vec<_> = self.globals.borrow().keys().cloned().collect();
        let mut locals: Vec<_> = self.locals.keys().cloned().collect();
        let mut functions: Vec<_> = self.functions.borrow().keys().cloned().collect();
        globals.sort_unstable();
        locals.sort_unstable();
        functions.sort_unstable();
        f.debug_struct("EvalContext")
            .field("globals", &globals)
            .field("locals", &locals)
            .field("functions", &functions)
            .field("config", &self.config)
            .field("depth", &self.depth)
            .finish()
    }
}
