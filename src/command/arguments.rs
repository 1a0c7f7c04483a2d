use std::collections::HashMap;
use std::fmt::Display;
use std::str::FromStr;

use serde::Serialize;

use super::ArgumentError;

/// Placeholder values extracted from one input line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Arguments {
    arguments: HashMap<String, String>,
    input: String,
}

impl Arguments {
    pub fn new(arguments: HashMap<String, String>, input: impl Into<String>) -> Self {
        Self {
            arguments,
            input: input.into(),
        }
    }

    /// The raw input line the arguments were extracted from.
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn get(&self, name: &str) -> Result<&str, ArgumentError> {
        self.get_optional(name)
            .ok_or_else(|| ArgumentError::Missing(name.to_string()))
    }

    pub fn get_optional(&self, name: &str) -> Option<&str> {
        self.arguments.get(name).map(String::as_str)
    }

    pub fn get_or<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.get_optional(name).unwrap_or(default)
    }

    /// Parse the value bound to `name` into `T`.
    pub fn get_parsed<T>(&self, name: &str) -> Result<T, ArgumentError>
    where
        T: FromStr,
        T::Err: Display,
    {
        let value = self.get(name)?;
        value.parse().map_err(|e: T::Err| ArgumentError::Invalid {
            name: name.to_string(),
            value: value.to_string(),
            message: e.to_string(),
        })
    }

    /// Like [`Arguments::get_parsed`], but an absent argument yields `None`.
    pub fn get_parsed_optional<T>(&self, name: &str) -> Result<Option<T>, ArgumentError>
    where
        T: FromStr,
        T::Err: Display,
    {
        if self.contains(name) {
            self.get_parsed(name).map(Some)
        } else {
            Ok(None)
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.arguments.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.arguments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arguments.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.arguments
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}
