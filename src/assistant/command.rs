//! Command words and input tokenization.

use crate::error::{AssistantError, AssistantResult};
use std::convert::Infallible;
use std::str::FromStr;

/// A command recognised by the assistant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    AddPhone,
    RemovePhone,
    /// `close` or `exit`
    Exit,
    /// Anything else, lowercased
    Unknown(String),
}

impl FromStr for Command {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "hello" => Command::Hello,
            "add" => Command::Add,
            "change" => Command::Change,
            "phone" => Command::Phone,
            "all" => Command::All,
            "add-birthday" => Command::AddBirthday,
            "show-birthday" => Command::ShowBirthday,
            "birthdays" => Command::Birthdays,
            "add-phone" => Command::AddPhone,
            "remove-phone" => Command::RemovePhone,
            "close" | "exit" => Command::Exit,
            other => Command::Unknown(other.to_string()),
        })
    }
}

impl Command {
    /// Canonical command word.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Hello => "hello",
            Command::Add => "add",
            Command::Change => "change",
            Command::Phone => "phone",
            Command::All => "all",
            Command::AddBirthday => "add-birthday",
            Command::ShowBirthday => "show-birthday",
            Command::Birthdays => "birthdays",
            Command::AddPhone => "add-phone",
            Command::RemovePhone => "remove-phone",
            Command::Exit => "exit",
            Command::Unknown(_) => "unknown",
        }
    }

    pub fn usage(&self) -> &'static str {
        match self {
            Command::Add => "add <name> <phone> [birthday]",
            Command::Change => "change <name> <phone> [birthday]",
            Command::Phone => "phone <name>",
            Command::AddBirthday => "add-birthday <name> <DD.MM.YYYY>",
            Command::ShowBirthday => "show-birthday <name>",
            Command::AddPhone => "add-phone <name> <phone>",
            Command::RemovePhone => "remove-phone <name> <phone>",
            Command::Hello => "hello",
            Command::All => "all",
            Command::Birthdays => "birthdays",
            Command::Exit => "close | exit",
            Command::Unknown(_) => "",
        }
    }

    /// The `index`-th argument, or `MissingArguments` with this command's usage.
    pub fn arg<'a>(&self, args: &[&'a str], index: usize) -> AssistantResult<&'a str> {
        args.get(index)
            .copied()
            .ok_or_else(|| AssistantError::MissingArguments {
                command: self.name(),
                usage: self.usage(),
            })
    }
}

/// Split a raw input line into a command and its whitespace-separated arguments.
///
/// # Errors
///
/// Returns `InvalidFormat` for a blank line.
pub fn parse_input(line: &str) -> AssistantResult<(Command, Vec<&str>)> {
    let mut parts = line.split_whitespace();
    let word = parts.next().ok_or_else(|| {
        AssistantError::InvalidFormat("No parameters given. Please enter a command.".to_string())
    })?;

    let command = match word.parse::<Command>() {
        Ok(command) => command,
        Err(never) => match never {},
    };

    Ok((command, parts.collect()))
}
