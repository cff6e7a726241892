//! Function registry boundary
//!
//! The host engine is anything that can accept named functions; the
//! boundary is the single-method [`FunctionRegistry`] trait.
//! [`RegisteredFunctions`] is a simple ordered implementation for tests and
//! for hosts that do not bring their own engine.

use crate::function::ExpressionFunction;

/// Accepts named expression functions for later execution
pub trait FunctionRegistry {
    /// Register one function; duplicate handling is the implementation's
    /// concern
    fn register_function(&mut self, function: ExpressionFunction);
}

/// Ordered in-memory function registry
#[derive(Debug, Default)]
pub struct RegisteredFunctions {
    functions: Vec<ExpressionFunction>,
}

impl RegisteredFunctions {
    /// Create new empty registry
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registered names, in registration order
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.functions.iter().map(|f| f.name()).collect()
    }

    /// First registered function with the given name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ExpressionFunction> {
        self.functions.iter().find(|f| f.name() == name)
    }

    /// Check if a function name is registered
    #[inline]
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Number of registered functions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    /// Check if registry is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Iterate over registered functions in registration order
    pub fn iter(&self) -> impl Iterator<Item = &ExpressionFunction> {
        self.functions.iter()
    }
}

impl FunctionRegistry for RegisteredFunctions {
    fn register_function(&mut self, function: ExpressionFunction) {
        self.functions.push(function);
    }
}
