//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is empty.
    EmptyName,

    /// The provided phone number is not exactly ten digits.
    InvalidPhone(String),

    /// The provided birthday is not a real `DD.MM.YYYY` date.
    InvalidBirthday(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Contact name cannot be empty"),
            Self::InvalidPhone(phone) => {
                write!(f, "Invalid phone number format: {} (expected 10 digits)", phone)
            }
            Self::InvalidBirthday(birthday) => write!(
                f,
                "Invalid date format for birthday: {}. Please use DD.MM.YYYY.",
                birthday
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        assert_eq!(
            ValidationError::EmptyName.to_string(),
            "Contact name cannot be empty"
        );
        assert!(ValidationError::InvalidPhone("12".to_string())
            .to_string()
            .contains("12"));
        assert!(ValidationError::InvalidBirthday("1.1.2020".to_string())
            .to_string()
            .contains("DD.MM.YYYY"));
    }
}
