//! Writing command envelopes as property lists

use crate::core::CommandEnvelope;
use crate::error::Result;
use log::debug;
use std::io::{self, Write};

/// Property list encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlistFormat {
    /// XML plist document
    #[default]
    Xml,
    /// Binary plist (`bplist00`)
    Binary,
}

/// Configuration for the envelope writer
#[derive(Debug, Clone, Default)]
pub struct WriterConfig {
    /// Encoding to use
    pub format: PlistFormat,
}

/// Serializes command envelopes to a byte sink
pub struct EnvelopeWriter {
    config: WriterConfig,
}

impl EnvelopeWriter {
    /// Create a writer with the default configuration
    pub fn new() -> Self {
        Self::with_config(WriterConfig::default())
    }

    /// Create a writer with a custom configuration
    pub fn with_config(config: WriterConfig) -> Self {
        Self { config }
    }

    /// Create a writer for a given encoding
    pub fn with_format(format: PlistFormat) -> Self {
        Self::with_config(WriterConfig { format })
    }

    /// The configuration this writer encodes with
    pub fn config(&self) -> &WriterConfig {
        &self.config
    }

    /// Encode the envelope into `writer` and flush it
    pub fn write<W: Write>(&self, envelope: &CommandEnvelope, mut writer: W) -> Result<()> {
        debug!(
            "Writing {:?} plist for command {}",
            self.config.format,
            envelope.command_uuid()
        );

        match self.config.format {
            PlistFormat::Xml => plist::to_writer_xml(&mut writer, envelope)?,
            PlistFormat::Binary => plist::to_writer_binary(&mut writer, envelope)?,
        }
        writer.flush()?;
        Ok(())
    }

    /// Encode the envelope into a buffer
    pub fn to_bytes(&self, envelope: &CommandEnvelope) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.write(envelope, &mut buf)?;
        Ok(buf)
    }

    /// Encode the envelope to standard output
    pub fn write_stdout(&self, envelope: &CommandEnvelope) -> Result<()> {
        let stdout = io::stdout();
        self.write(envelope, stdout.lock())
    }
}

impl Default for EnvelopeWriter {
    fn default() -> Self {
        Self::new()
    }
}
