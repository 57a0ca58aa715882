//! Profile input and plist output

pub mod profile;
pub mod writer;

pub use profile::{load_install_profile, open_profile};
pub use writer::{EnvelopeWriter, PlistFormat, WriterConfig};
