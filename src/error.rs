//! Error types for the mdmcmd library
//!
//! This module provides error handling for every library operation: reading
//! profile payloads, rejecting bad CLI combinations, and encoding the
//! property list.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for all library operations
#[derive(Error, Debug)]
pub enum MdmCmdError {
    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Property list serialization errors
    #[error("plist error: {0}")]
    Plist(#[from] plist::Error),

    /// Profile file not found
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Profile file exists but cannot be opened
    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    /// Invalid command selection (neither or both of a command and --random)
    #[error("Usage error: {reason}")]
    Usage { reason: String },
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, MdmCmdError>;

impl MdmCmdError {
    /// Create a new file not found error
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a new permission denied error
    pub fn permission_denied(path: impl Into<PathBuf>) -> Self {
        Self::PermissionDenied { path: path.into() }
    }

    /// Create a new usage error
    pub fn usage(reason: impl Into<String>) -> Self {
        Self::Usage {
            reason: reason.into(),
        }
    }

    /// Whether usage help should accompany this error
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::Usage { .. })
    }

    /// Process exit status for this error.
    ///
    /// Anything caused by the arguments themselves, including a profile path
    /// that cannot be opened, exits with 2.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Usage { .. } | Self::FileNotFound { .. } | Self::PermissionDenied { .. } => 2,
            Self::Io(_) | Self::Plist(_) => 1,
        }
    }
}
