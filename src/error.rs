//! Error types for the contact assistant.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur while handling a single assistant command.
///
/// None of these are fatal: the dispatcher turns each one into a reply and
/// keeps reading commands.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssistantError {
    /// Malformed phone, birthday or name text, or an empty command line
    #[error("{0}")]
    InvalidFormat(String),

    /// A contact with this name is already stored
    #[error("Contact {0} already exists.")]
    AlreadyExists(String),

    /// No contact with this name, or no matching phone on the contact
    #[error("{0} not found.")]
    NotFound(String),

    /// The contact already has a birthday
    #[error("Contact {0} can have only one birthday.")]
    BirthdayAlreadySet(String),

    /// The contact exists but has no birthday
    #[error("No birthday set for {0}.")]
    NoBirthdaySet(String),

    /// The command was given fewer arguments than it needs
    #[error("Not enough arguments for '{command}'. Usage: {usage}")]
    MissingArguments {
        command: &'static str,
        usage: &'static str,
    },
}

impl AssistantError {
    /// Error for a contact name that is not in the directory.
    pub fn contact_not_found(name: &str) -> Self {
        Self::NotFound(format!("Contact {}", name))
    }

    /// Error for a phone that is not stored on a contact.
    pub fn phone_not_found(name: &str, phone: &str) -> Self {
        Self::NotFound(format!("Phone {} of contact {}", phone, name))
    }
}

impl From<ValidationError> for AssistantError {
    fn from(err: ValidationError) -> Self {
        Self::InvalidFormat(err.to_string())
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with AssistantError
pub type AssistantResult<T> = Result<T, AssistantError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AssistantError::AlreadyExists("John".to_string());
        assert_eq!(err.to_string(), "Contact John already exists.");

        let err = AssistantError::contact_not_found("Jane");
        assert_eq!(err.to_string(), "Contact Jane not found.");

        let err = AssistantError::NoBirthdaySet("Jane".to_string());
        assert_eq!(err.to_string(), "No birthday set for Jane.");

        let err = ConfigError::InvalidValue {
            var: "ASSISTANT_TODAY".to_string(),
            reason: "Must be YYYY-MM-DD".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for ASSISTANT_TODAY: Must be YYYY-MM-DD"
        );
    }

    #[test]
    fn test_validation_error_maps_to_invalid_format() {
        let err: AssistantError = ValidationError::InvalidPhone("42".to_string()).into();
        match err {
            AssistantError::InvalidFormat(message) => assert!(message.contains("42")),
            other => panic!("Expected InvalidFormat, got: {:?}", other),
        }
    }

    #[test]
    fn test_missing_arguments_display() {
        let err = AssistantError::MissingArguments {
            command: "phone",
            usage: "phone <name>",
        };
        assert!(err.to_string().contains("phone <name>"));
    }
}
