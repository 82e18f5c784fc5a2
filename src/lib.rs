//! Contact Assistant - an interactive command-line address book.
//!
//! The assistant keeps contacts in memory for the lifetime of the process:
//! names, ten-digit phone numbers and birthdays. It validates every field on
//! entry and can report which birthdays fall in the coming week, moving
//! weekend birthdays to the following weekday.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (name, phone, birthday)
//! - **models**: The contact record aggregating those values
//! - **directory**: The in-memory directory and the upcoming-birthday report
//! - **assistant**: Command parsing, the session and the REPL loop
//! - **config**: Configuration from environment variables
//! - **error**: Custom error types

pub mod assistant;
pub mod config;
pub mod directory;
pub mod domain;
pub mod error;
pub mod models;

pub use assistant::{Assistant, Command, Reply};
pub use config::Config;
pub use directory::{BirthdayGroup, ContactDirectory, UpcomingBirthdays};
pub use domain::{BirthdayDate, ContactName, PhoneNumber, ValidationError};
pub use error::{AssistantError, AssistantResult, ConfigError};
pub use models::ContactRecord;
