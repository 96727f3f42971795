use std::collections::HashMap;

use crate::interpreter::value::core::Value;

/// Maps identifiers to their current values.
///
/// There is a single flat map; declaring a name that already exists replaces
/// the old value. Cloning is cheap for functions, which are shared.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Environment {
    values: HashMap<String, Value>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name` to `value`, overwriting any previous binding.
    ///
    /// ## Example
    /// ```
    /// use lipi::interpreter::{evaluator::environment::Environment, value::core::Value};
    ///
    /// let mut env = Environment::new();
    /// env.define("क", Value::Number(1.0));
    /// env.define("क", Value::Null);
    ///
    /// assert_eq!(env.get("क"), Some(&Value::Null));
    /// assert_eq!(env.len(), 1);
    /// ```
    pub fn define(&mut self, name: impl Into<String>, value: Value) {
        self.values.insert(name.into(), value);
    }

    /// Looks up `name`. `None` means the name is not bound at all; a bound
    /// null comes back as `Some(&Value::Null)`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Returns `true` if `name` is bound.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Number of bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if nothing is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
