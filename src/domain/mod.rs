//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the fields of a contact:
//! its name, phone numbers and birthday. These value objects validate at
//! construction time and prevent malformed data from being stored.

pub mod birthday;
pub mod errors;
pub mod name;
pub mod phone;

pub use birthday::{BirthdayDate, BIRTHDAY_FORMAT};
pub use errors::ValidationError;
pub use name::ContactName;
pub use phone::{PhoneNumber, PHONE_DIGITS};
