//! Named filter table exposed to the template host.
//!
//! The host looks filters up by the name used in template syntax
//! (`{{ body | slides }}`). A default registry holds exactly one entry,
//! `slides`.

use rayon::prelude::*;
use rustc_hash::FxHashMap;
use serde_json::Value;

use crate::config::{ConfigError, FilterConfig};
use crate::debug;
use crate::filter::{Filter, FilterError, SlidesFilter};

/// Filters keyed by template name.
pub struct FilterRegistry {
    filters: FxHashMap<String, Box<dyn Filter>>,
}

impl FilterRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            filters: FxHashMap::default(),
        }
    }

    /// Create a registry with the stock filters built from `config`.
    ///
    /// Fails if `config` does not pass validation.
    pub fn with_config(config: &FilterConfig) -> Result<Self, ConfigError> {
        let mut registry = Self::new();
        registry.register(SlidesFilter::new(config)?);
        Ok(registry)
    }

    /// Register a filter under its own name.
    ///
    /// Returns the previously registered filter of that name, if any.
    pub fn register<F: Filter + 'static>(&mut self, filter: F) -> Option<Box<dyn Filter>> {
        let name = filter.name().to_string();
        debug!("registry"; "registered filter `{}`", name);
        self.filters.insert(name, Box::new(filter))
    }

    pub fn get(&self, name: &str) -> Option<&dyn Filter> {
        self.filters.get(name).map(Box::as_ref)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.filters.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.filters.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Apply the filter `name` to `input`.
    pub fn apply(&self, name: &str, input: &str) -> Result<String, FilterError> {
        Ok(self.lookup(name)?.apply(input))
    }

    /// Apply the filter `name` to a dynamic host value.
    ///
    /// Only strings are accepted; anything else is reported with its kind.
    pub fn apply_value(&self, name: &str, value: &Value) -> Result<Value, FilterError> {
        let filter = self.lookup(name)?;
        match value {
            Value::String(s) => Ok(Value::String(filter.apply(s))),
            other => Err(FilterError::NotAString {
                filter: name.to_string(),
                found: value_kind(other),
            }),
        }
    }

    /// Apply the filter `name` to many inputs in parallel, preserving order.
    pub fn apply_all<S>(&self, name: &str, inputs: &[S]) -> Result<Vec<String>, FilterError>
    where
        S: AsRef<str> + Sync,
    {
        let filter = self.lookup(name)?;
        debug!("registry"; "applying `{}` to {} inputs", name, inputs.len());
        Ok(inputs
            .par_iter()
            .map(|input| filter.apply(input.as_ref()))
            .collect())
    }

    fn lookup(&self, name: &str) -> Result<&dyn Filter, FilterError> {
        self.get(name)
            .ok_or_else(|| FilterError::Unknown(name.to_string()))
    }
}

impl Default for FilterRegistry {
    fn default() -> Self {
        let mut registry = Self::new();
        registry.register(SlidesFilter::default());
        registry
    }
}

impl std::fmt::Debug for FilterRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterRegistry")
            .field("filters", &self.names())
            .finish()
    }
}

/// JSON kind name for error messages.
const fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
