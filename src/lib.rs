//! mdmcmd: a library for generating MDM protocol command payloads
//!
//! This library builds a single Mobile Device Management command, wraps it in
//! an envelope tagged with a `CommandUUID`, and serializes the result as a
//! property list. It is the foundation of the `mdmcmd` command-line tool.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use mdmcmd::{Command, CommandEnvelope, EnvelopeWriter, RequestType, Result};
//!
//! fn main() -> Result<()> {
//!     let command = Command::simple(RequestType::ProfileList);
//!     let envelope = CommandEnvelope::new(None, &command);
//!     EnvelopeWriter::new().write_stdout(&envelope)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Commands with arguments
//!
//! ```rust,no_run
//! use mdmcmd::{Command, CommandEnvelope, EnvelopeWriter, PlistFormat, Result};
//! use std::path::Path;
//!
//! fn main() -> Result<()> {
//!     let info = Command::device_information(["Model", "OSVersion"]);
//!     let remove = Command::remove_profile("com.example.profile");
//!     let install = mdmcmd::io::load_install_profile(Path::new("wifi.mobileconfig"))?;
//!
//!     let writer = EnvelopeWriter::with_format(PlistFormat::Binary);
//!     for command in [info, remove, install] {
//!         let bytes = writer.to_bytes(&CommandEnvelope::new(None, &command))?;
//!         println!("{} bytes", bytes.len());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - [`core`]: request types, command bodies and the envelope
//! - [`io`]: reading profile files and writing plist output
//! - [`error`]: the crate error type

// Public API exports
pub use crate::error::{MdmCmdError, Result};

// Core types
pub use crate::core::{Command, CommandEnvelope, RequestType, UnknownRequestType};

// IO types
pub use crate::io::{EnvelopeWriter, PlistFormat, WriterConfig};

pub mod core;
pub mod error;
pub mod io;

// CLI components are available only in the binary, not as part of the library API

/// Build the envelope for a command and encode it in one step
pub fn render(
    command: &Command,
    command_uuid: Option<String>,
    format: PlistFormat,
) -> Result<Vec<u8>> {
    let envelope = CommandEnvelope::new(command_uuid, command);
    EnvelopeWriter::with_format(format).to_bytes(&envelope)
}
