//! Assistant session: executes one command line against a directory.

use super::command::{parse_input, Command};
use crate::config::Config;
use crate::directory::ContactDirectory;
use crate::error::AssistantResult;
use crate::models::ContactRecord;
use chrono::{Local, NaiveDate};
use tracing::{debug, warn};

pub const GREETING: &str = "Welcome to the assistant bot!";
pub const FAREWELL: &str = "Goodbye!";
pub const HELLO_REPLY: &str = "How can I help you?";
pub const INVALID_COMMAND: &str = "Invalid command.";
pub const NO_UPCOMING_BIRTHDAYS: &str = "No upcoming birthdays in the next week.";
pub const NO_CONTACTS: &str = "No contacts saved.";

/// What the session wants printed after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the text and read the next command
    Continue(String),
    /// Print the text and stop
    Exit(String),
}

impl Reply {
    pub fn text(&self) -> &str {
        match self {
            Reply::Continue(text) | Reply::Exit(text) => text,
        }
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, Reply::Exit(_))
    }
}

/// One interactive session owning its contact directory.
#[derive(Debug, Default)]
pub struct Assistant {
    directory: ContactDirectory,
    today_override: Option<NaiveDate>,
}

impl Assistant {
    pub fn new(directory: ContactDirectory) -> Self {
        Self {
            directory,
            today_override: None,
        }
    }

    /// Build an empty session honouring the configured date override.
    pub fn from_config(config: &Config) -> Self {
        Self {
            directory: ContactDirectory::new(),
            today_override: config.today,
        }
    }

    /// Pin the date used by `birthdays`.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today_override = Some(today);
        self
    }

    pub fn directory(&self) -> &ContactDirectory {
        &self.directory
    }

    /// The pinned date, or the local calendar date.
    pub fn today(&self) -> NaiveDate {
        self.today_override.unwrap_or_else(|| Local::now().date_naive())
    }

    /// Handle one raw input line. Errors become reply text.
    pub fn handle(&mut self, line: &str) -> Reply {
        let outcome = parse_input(line).and_then(|(command, args)| {
            debug!(command = command.name(), args = args.len(), "Executing command");
            self.execute(command, &args)
        });

        match outcome {
            Ok(reply) => reply,
            Err(err) => {
                warn!(error = %err, "Command rejected");
                Reply::Continue(err.to_string())
            }
        }
    }

    fn execute(&mut self, command: Command, args: &[&str]) -> AssistantResult<Reply> {
        let text = match &command {
            Command::Exit => return Ok(Reply::Exit(FAREWELL.to_string())),
            Command::Hello => HELLO_REPLY.to_string(),
            Command::Add => {
                let record = Self::build_record(&command, args)?;
                self.directory.add(record)?;
                "Contact added.".to_string()
            }
            Command::Change => {
                let record = Self::build_record(&command, args)?;
                self.directory.replace(record)?;
                "Contact updated.".to_string()
            }
            Command::Phone => self.directory.phones_of(command.arg(args, 0)?)?,
            Command::All => {
                if self.directory.is_empty() {
                    NO_CONTACTS.to_string()
                } else {
                    self.directory.all().join("\n")
                }
            }
            Command::AddBirthday => {
                let name = command.arg(args, 0)?;
                let birthday = command.arg(args, 1)?;
                self.directory.get_mut(name)?.add_birthday(birthday)?;
                format!("Birthday added for {}.", name)
            }
            Command::ShowBirthday => self.directory.birthday_of(command.arg(args, 0)?)?,
            Command::Birthdays => {
                let report = self.directory.upcoming_birthdays(self.today());
                if report.is_empty() {
                    NO_UPCOMING_BIRTHDAYS.to_string()
                } else {
                    report.lines().join("\n")
                }
            }
            Command::AddPhone => {
                let name = command.arg(args, 0)?;
                let phone = command.arg(args, 1)?;
                self.directory.get_mut(name)?.add_phone(phone)?;
                format!("Phone added for {}.", name)
            }
            Command::RemovePhone => {
                let name = command.arg(args, 0)?;
                let phone = command.arg(args, 1)?;
                self.directory.get_mut(name)?.remove_phone(phone)?;
                format!("Phone removed for {}.", name)
            }
            Command::Unknown(word) => {
                debug!(word = word.as_str(), "Unknown command");
                INVALID_COMMAND.to_string()
            }
        };

        Ok(Reply::Continue(text))
    }

    /// `<name> <phone> [birthday]`, extra tokens ignored.
    fn build_record(command: &Command, args: &[&str]) -> AssistantResult<ContactRecord> {
        let name = command.arg(args, 0)?;
        let phone = command.arg(args, 1)?;
        let birthday = args.get(2).copied();
        ContactRecord::new(name, Some(phone), birthday)
    }
}
