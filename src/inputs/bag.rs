//! inputs::bag
//!
//! The resolved argument bag handed to a command.

use std::collections::BTreeMap;

use serde::Serialize;

use super::descriptor::{ArgDescriptor, ArgValue};
use super::error::InputError;
use crate::core::settings::SettingsSnapshot;

/// Reserved name for leftover positional tokens.
pub const REST_KEY: &str = "_";

/// Resolved argument values for one command invocation.
///
/// `rest` holds the positional tokens no required descriptor consumed.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ArgumentBag {
    #[serde(flatten)]
    values: BTreeMap<String, ArgValue>,
    #[serde(rename = "_", skip_serializing_if = "Vec::is_empty")]
    rest: Vec<String>,
}

impl ArgumentBag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: ArgValue) {
        self.values.insert(name.into(), value);
    }

    pub fn remove(&mut self, name: &str) -> Option<ArgValue> {
        self.values.remove(name)
    }

    pub fn get(&self, name: &str) -> Option<&ArgValue> {
        self.values.get(name)
    }

    /// Whether `name` maps to a truthy value.
    pub fn contains(&self, name: &str) -> bool {
        self.values.get(name).is_some_and(ArgValue::is_truthy)
    }

    pub fn str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(ArgValue::as_str)
    }

    pub fn int(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(ArgValue::as_i64)
    }

    pub fn rest(&self) -> &[String] {
        &self.rest
    }

    pub fn set_rest(&mut self, rest: Vec<String>) {
        self.rest = rest;
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ArgValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// The value for a required descriptor, or `MissingRequired`.
    pub fn require(&self, descriptor: &ArgDescriptor) -> Result<&ArgValue, InputError> {
        self.values
            .get(descriptor.name())
            .filter(|v| v.is_truthy())
            .ok_or_else(|| InputError::MissingRequired {
                name: descriptor.name().to_string(),
                label: descriptor.label().to_string(),
            })
    }

    pub fn require_str(&self, descriptor: &ArgDescriptor) -> Result<&str, InputError> {
        let value = self.require(descriptor)?;
        value.as_str().ok_or_else(|| wrong_type(descriptor, "string", value))
    }

    pub fn require_int(&self, descriptor: &ArgDescriptor) -> Result<i64, InputError> {
        let value = self.require(descriptor)?;
        value.as_i64().ok_or_else(|| wrong_type(descriptor, "integer", value))
    }

    /// First required descriptor without a truthy value, if any.
    pub fn first_missing<'a>(&self, required: &'a [ArgDescriptor]) -> Option<&'a ArgDescriptor> {
        required.iter().find(|d| !self.contains(d.name()))
    }

    /// Raw form suitable for persisting. `rest` is not persisted.
    pub fn to_settings(&self) -> SettingsSnapshot {
        self.values
            .iter()
            .map(|(k, v)| (k.clone(), v.to_string()))
            .collect()
    }
}

fn wrong_type(descriptor: &ArgDescriptor, expected: &'static str, value: &ArgValue) -> InputError {
    InputError::WrongType {
        name: descriptor.name().to_string(),
        expected,
        actual: value.type_name(),
    }
}
