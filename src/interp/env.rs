//! Name → value environment, owned by one interpreter instance.

use indexmap::IndexMap;

use crate::value::Value;

#[derive(Debug, Default)]
pub struct Environment {
    bindings: IndexMap<String, Value>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a name. Rebinding an existing name overwrites its value (the
    /// old value, string payload included, is dropped); it never errors.
    pub fn define(&mut self, name: impl Into<String>, value: Value) {
        let name = name.into();
        tracing::debug!(%name, "defined variable");
        self.bindings.insert(name, value);
    }

    /// Copy of the value bound to `name`, if any.
    pub fn get(&self, name: &str) -> Option<Value> {
        self.bindings.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.bindings.iter().map(|(name, value)| (name.as_str(), value))
    }
}
