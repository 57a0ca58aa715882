//! Loading configuration profiles for InstallProfile

use crate::core::Command;
use crate::error::{MdmCmdError, Result};
use log::debug;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

/// Open a profile read-only, mapping common failures to typed errors
pub fn open_profile(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => MdmCmdError::file_not_found(path),
        io::ErrorKind::PermissionDenied => MdmCmdError::permission_denied(path),
        _ => MdmCmdError::Io(e),
    })
}

/// Read a profile file and build the InstallProfile command for it
pub fn load_install_profile(path: &Path) -> Result<Command> {
    debug!("Loading profile from {}", path.display());
    let file = open_profile(path)?;
    Command::install_profile_from_reader(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_load_install_profile_reads_exact_bytes() {
        let bytes = b"<?xml version=\"1.0\"?>\n<plist>\x00\x01\xfe</plist>";
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(bytes).unwrap();
        temp_file.flush().unwrap();

        let cmd = load_install_profile(temp_file.path()).unwrap();
        assert_eq!(cmd, Command::install_profile(bytes.to_vec()));
    }

    #[test]
    fn test_empty_profile() {
        let temp_file = NamedTempFile::new().unwrap();
        let cmd = load_install_profile(temp_file.path()).unwrap();
        assert_eq!(cmd, Command::install_profile(Vec::new()));
    }

    #[test]
    fn test_missing_profile() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.mobileconfig");

        let err = load_install_profile(&path).unwrap_err();
        match err {
            MdmCmdError::FileNotFound { path: p } => assert_eq!(p, path),
            other => panic!("unexpected error {other:?}"),
        }
        assert_eq!(load_install_profile(&path).unwrap_err().exit_code(), 2);
    }

    #[test]
    fn test_directory_is_not_a_profile() {
        let temp_dir = TempDir::new().unwrap();
        assert!(load_install_profile(temp_dir.path()).is_err());
    }
}
