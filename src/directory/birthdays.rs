//! Upcoming birthday report.
//!
//! For every contact with a birthday the report computes `delta`, the number
//! of days from `today` to the birthday's month/day in `today`'s year. Only
//! `0 <= delta < 7` qualifies. The weekend shift is applied afterwards:
//! a birthday falling on Saturday is reminded two days later, one falling on
//! Sunday one day later. Contacts are grouped under the weekday name of
//! `today + delta` after the shift.

use crate::models::ContactRecord;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use std::fmt;
use tracing::trace;

/// Size of the qualifying window, in days, checked before any weekend shift.
pub const BIRTHDAY_WINDOW_DAYS: i64 = 7;

/// Full English name of a weekday.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Days a reminder is pushed forward when the birthday lands on a weekend.
fn weekend_shift(day: Weekday) -> i64 {
    match day {
        Weekday::Sat => 2,
        Weekday::Sun => 1,
        _ => 0,
    }
}

/// Contacts to remind on one weekday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BirthdayGroup {
    pub weekday: Weekday,
    pub names: Vec<String>,
}

impl fmt::Display for BirthdayGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", weekday_name(self.weekday), self.names.join(", "))
    }
}

/// Birthdays in the coming week grouped by reminder weekday.
///
/// Groups are ordered by the earliest reminder day they contain. Names within
/// a group keep the order in which records were visited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpcomingBirthdays {
    groups: Vec<(i64, BirthdayGroup)>,
}

impl UpcomingBirthdays {
    /// Build the report for `records` as seen on `today`.
    pub fn compute<'a, I>(records: I, today: NaiveDate) -> Self
    where
        I: IntoIterator<Item = &'a ContactRecord>,
    {
        let mut report = Self::default();

        for record in records {
            let Some(birthday) = record.birthday() else {
                continue;
            };
            let Some(this_year) = birthday.in_year(today.year()) else {
                continue;
            };

            let delta = (this_year - today).num_days();
            if !(0..BIRTHDAY_WINDOW_DAYS).contains(&delta) {
                continue;
            }

            let offset = delta + weekend_shift(this_year.weekday());
            let reminder_day = today + Duration::days(offset);
            trace!(
                name = record.name().as_str(),
                delta,
                offset,
                "Birthday qualifies for reminder"
            );
            report.push(reminder_day.weekday(), offset, record.name().to_string());
        }

        report.groups.sort_by_key(|(first_offset, _)| *first_offset);
        report
    }

    fn push(&mut self, weekday: Weekday, offset: i64, name: String) {
        match self.groups.iter_mut().find(|(_, g)| g.weekday == weekday) {
            Some((first_offset, group)) => {
                *first_offset = (*first_offset).min(offset);
                group.names.push(name);
            }
            None => self.groups.push((
                offset,
                BirthdayGroup {
                    weekday,
                    names: vec![name],
                },
            )),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of distinct reminder weekdays.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn groups(&self) -> impl Iterator<Item = &BirthdayGroup> {
        self.groups.iter().map(|(_, group)| group)
    }

    /// Names to remind on `weekday`, if any.
    pub fn names_for(&self, weekday: Weekday) -> Option<&[String]> {
        self.groups()
            .find(|group| group.weekday == weekday)
            .map(|group| group.names.as_slice())
    }

    /// One `"<Weekday>: <name>, <name>"` line per group.
    pub fn lines(&self) -> Vec<String> {
        self.groups().map(ToString::to_string).collect()
    }
}
