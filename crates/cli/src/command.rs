//! Line commands understood by the terminal driver

use std::str::FromStr;

use kainji_form::{Field, FormEvent, UnknownField};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command: {0} (type `help` for a list)")]
    Unknown(String),

    #[error("Usage: set <field> <value>")]
    MissingField,

    #[error(transparent)]
    UnknownField(#[from] UnknownField),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Set { field: Field, value: String },
    Connect,
    Disconnect,
    Submit,
    Show,
    Fields,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  set <field> <value>   edit a field (value may be empty)
  connect               connect the wallet
  disconnect            disconnect the wallet
  submit                validate and mint the draft
  show                  print draft, report and outcome as JSON
  fields                describe every field
  help                  show this message
  quit                  leave";

impl Command {
    /// The form event this command maps to, if any
    pub fn into_event(self) -> Option<FormEvent> {
        match self {
            Command::Set { field, value } => Some(FormEvent::FieldEdited { field, value }),
            Command::Connect => Some(FormEvent::ConnectRequested),
            Command::Disconnect => Some(FormEvent::DisconnectRequested),
            Command::Submit => Some(FormEvent::SubmitRequested),
            Command::Show | Command::Fields | Command::Help | Command::Quit => None,
        }
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_start();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest),
            None => (line.trim_end(), ""),
        };

        match verb.to_ascii_lowercase().as_str() {
            "set" => {
                let rest = rest.trim_start();
                let (field, value) = match rest.split_once(char::is_whitespace) {
                    Some((field, value)) => (field, value),
                    None => (rest.trim_end(), ""),
                };
                if field.is_empty() {
                    return Err(CommandError::MissingField);
                }
                Ok(Command::Set {
                    field: field.parse()?,
                    value: value.to_string(),
                })
            }
            "connect" | "login" => Ok(Command::Connect),
            "disconnect" | "logout" => Ok(Command::Disconnect),
            "submit" | "mint" | "create" => Ok(Command::Submit),
            "show" | "status" => Ok(Command::Show),
            "fields" => Ok(Command::Fields),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}
