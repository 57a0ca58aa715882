//! The command envelope written to standard output

use super::command::Command;
use log::warn;
use plist::Dictionary;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// `{ CommandUUID, Command }` as sent to a device
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandEnvelope {
    #[serde(rename = "CommandUUID")]
    command_uuid: String,
    #[serde(rename = "Command")]
    command: Dictionary,
}

impl CommandEnvelope {
    /// Wrap a command, generating a fresh v4 UUID when none is given.
    ///
    /// A supplied identifier is kept exactly as written, even when it is not
    /// a UUID.
    pub fn new(command_uuid: Option<String>, command: &Command) -> Self {
        let command_uuid = match command_uuid {
            Some(id) => {
                if !is_valid_uuid(&id) {
                    warn!("CommandUUID {:?} is not a UUID; using it as given", id);
                }
                id
            }
            None => generate_uuid(),
        };

        Self {
            command_uuid,
            command: command.to_dictionary(),
        }
    }

    /// The identifier this command is tagged with
    pub fn command_uuid(&self) -> &str {
        &self.command_uuid
    }
}

/// A fresh random command identifier in lowercase hyphenated form
pub fn generate_uuid() -> String {
    Uuid::new_v4().to_string()
}

/// Whether a string is a syntactically valid UUID
pub fn is_valid_uuid(value: &str) -> bool {
    Uuid::parse_str(value).is_ok()
}
