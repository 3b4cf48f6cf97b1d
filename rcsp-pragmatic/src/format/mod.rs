//! This module defines logic to serialize/deserialize problem in pragmatic format from json input
//! and create and write pragmatic solution.

#[cfg(test)]
#[path = "../../tests/unit/format/format_test.rs"]
mod format_test;

use serde::Serialize;
use std::fmt;

pub mod problem;
pub mod solution;

/// A format error.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct FormatError {
    /// An error code in registry.
    pub code: String,
    /// A possible error cause.
    pub cause: String,
    /// An action to take in order to recover from error.
    pub action: String,
    /// A details about exception.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl FormatError {
    /// Creates a new instance of `FormatError` action without details.
    pub fn new(code: String, cause: String, action: String) -> Self {
        Self { code, cause, action, details: None }
    }

    /// Creates a new instance of `FormatError` action.
    pub fn new_with_details(code: String, cause: String, action: String, details: String) -> Self {
        Self { code, cause, action, details: Some(details) }
    }

    /// Serializes error into json string.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(&self).unwrap_or_else(|err| format!("cannot serialize error: '{err}'"))
    }

    /// Formats multiple format errors into json string.
    pub fn format_many_to_json(errors: &[Self]) -> String {
        serde_json::to_string_pretty(errors).unwrap_or_else(|err| format!("cannot serialize errors: '{err}'"))
    }

    /// Formats multiple format errors into string.
    pub fn format_many(errors: &[Self], separator: &str) -> String {
        errors.iter().map(|err| err.to_string()).collect::<Vec<_>>().join(separator)
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}, cause: '{}', action: '{}'.", self.code, self.cause, self.action)
    }
}

impl std::error::Error for FormatError {}

/// Keeps multiple format errors.
#[derive(Clone, Debug, PartialEq)]
pub struct MultiFormatError {
    /// Inner errors.
    pub errors: Vec<FormatError>,
}

impl MultiFormatError {
    /// Returns error codes.
    pub fn codes(&self) -> Vec<String> {
        self.errors.iter().map(|err| err.code.clone()).collect()
    }

    /// Formats errors into json string.
    pub fn to_json(&self) -> String {
        FormatError::format_many_to_json(self.errors.as_slice())
    }
}

impl fmt::Display for MultiFormatError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", FormatError::format_many(self.errors.as_slice(), "\n"))
    }
}

impl std::error::Error for MultiFormatError {}

impl From<Vec<FormatError>> for MultiFormatError {
    fn from(errors: Vec<FormatError>) -> Self {
        MultiFormatError { errors }
    }
}

impl From<FormatError> for MultiFormatError {
    fn from(error: FormatError) -> Self {
        MultiFormatError { errors: vec![error] }
    }
}

impl IntoIterator for MultiFormatError {
    type Item = FormatError;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}
