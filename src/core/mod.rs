//! Core types for building MDM commands
//!
//! - RequestType: the fixed catalogue of parameterless request types
//! - Command: a tagged command body, rendered as a plist dictionary
//! - CommandEnvelope: the `CommandUUID` + `Command` wrapper that gets emitted

pub mod command;
pub mod envelope;
pub mod request_type;

pub use command::Command;
pub use envelope::{generate_uuid, is_valid_uuid, CommandEnvelope};
pub use request_type::{RequestType, UnknownRequestType};
