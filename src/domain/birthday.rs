//! BirthdayDate value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Textual format birthdays are entered and displayed in.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

// chrono accepts unpadded fields, so the exact shape is checked first.
static BIRTHDAY_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").expect("Failed to compile birthday regex")
});

/// A birthday parsed from `DD.MM.YYYY`.
///
/// The date is a plain calendar date with no timezone attached. The original
/// text is kept so that the birthday renders exactly as it was entered.
///
/// # Example
///
/// ```
/// use contact_assistant::domain::BirthdayDate;
///
/// let birthday = BirthdayDate::new("01.01.2030").unwrap();
/// assert_eq!(birthday.as_str(), "01.01.2030");
/// assert!(BirthdayDate::new("31.02.2020").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BirthdayDate {
    raw: String,
    date: NaiveDate,
}

impl BirthdayDate {
    /// Create a new BirthdayDate, validating shape and calendar correctness.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the input is not exactly
    /// `DD.MM.YYYY` or does not name a real calendar day.
    pub fn new(birthday: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = birthday.into();

        if !BIRTHDAY_SHAPE.is_match(&raw) {
            return Err(ValidationError::InvalidBirthday(raw));
        }

        match NaiveDate::parse_from_str(&raw, BIRTHDAY_FORMAT) {
            Ok(date) => Ok(Self { raw, date }),
            Err(_) => Err(ValidationError::InvalidBirthday(raw)),
        }
    }

    /// Get the birthday as originally entered.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The parsed calendar date, including the birth year.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn month(&self) -> u32 {
        self.date.month()
    }

    pub fn day(&self) -> u32 {
        self.date.day()
    }

    /// Place this birthday's month and day into `year`.
    ///
    /// A 29 February birthday falls on 28 February in non-leap years.
    /// Returns `None` only when `year` is outside chrono's supported range.
    pub fn in_year(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month(), self.day()).or_else(|| {
            if self.month() == 2 && self.day() == 29 {
                NaiveDate::from_ymd_opt(year, 2, 28)
            } else {
                None
            }
        })
    }
}

impl Serialize for BirthdayDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.raw.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for BirthdayDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        BirthdayDate::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for BirthdayDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_birthday_valid() {
        let birthday = BirthdayDate::new("15.03.1990").unwrap();
        assert_eq!(birthday.as_str(), "15.03.1990");
        assert_eq!(birthday.date(), NaiveDate::from_ymd_opt(1990, 3, 15).unwrap());
        assert_eq!(birthday.month(), 3);
        assert_eq!(birthday.day(), 15);
    }

    #[test]
    fn test_birthday_rejects_impossible_dates() {
        assert!(BirthdayDate::new("31.02.2020").is_err());
        assert!(BirthdayDate::new("31.04.2021").is_err());
        assert!(BirthdayDate::new("01.13.2020").is_err());
        assert!(BirthdayDate::new("00.01.2020").is_err());
        assert!(BirthdayDate::new("29.02.2021").is_err());
        assert!(BirthdayDate::new("29.02.2020").is_ok());
    }

    #[test]
    fn test_birthday_rejects_wrong_shape() {
        assert!(BirthdayDate::new("").is_err());
        assert!(BirthdayDate::new("1.1.2020").is_err());
        assert!(BirthdayDate::new("2020-01-01").is_err());
        assert!(BirthdayDate::new("01/01/2020").is_err());
        assert!(BirthdayDate::new("01.01.20").is_err());
        assert!(BirthdayDate::new(" 01.01.2020").is_err());
    }

    #[test]
    fn test_birthday_in_year() {
        let birthday = BirthdayDate::new("07.11.1985").unwrap();
        assert_eq!(
            birthday.in_year(2026),
            NaiveDate::from_ymd_opt(2026, 11, 7)
        );
    }

    #[test]
    fn test_leap_day_birthday_in_common_year() {
        let birthday = BirthdayDate::new("29.02.2000").unwrap();
        assert_eq!(birthday.in_year(2024), NaiveDate::from_ymd_opt(2024, 2, 29));
        assert_eq!(birthday.in_year(2026), NaiveDate::from_ymd_opt(2026, 2, 28));
    }

    #[test]
    fn test_birthday_serialization() {
        let birthday = BirthdayDate::new("01.01.2030").unwrap();
        assert_eq!(serde_json::to_string(&birthday).unwrap(), "\"01.01.2030\"");

        let parsed: BirthdayDate = serde_json::from_str("\"01.01.2030\"").unwrap();
        assert_eq!(parsed, birthday);

        let invalid: Result<BirthdayDate, _> = serde_json::from_str("\"31.02.2020\"");
        assert!(invalid.is_err());
    }
}
