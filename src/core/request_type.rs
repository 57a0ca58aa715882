//! The fixed catalogue of parameterless MDM request types

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// MDM request types that carry no arguments beyond `RequestType`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestType {
    ProfileList,
    ProvisioningProfileList,
    CertificateList,
    SecurityInfo,
    RestartDevice,
    ShutDownDevice,
    StopMirroring,
    ClearRestrictionsPassword,
    UserList,
    LogOutUser,
    PlayLostModeSound,
    DisableLostMode,
    DeviceLocation,
    ManagedMediaList,
    DeviceConfigured,
    AvailableOSUpdates,
    NSExtensionMappings,
    OSUpdateStatus,
    EnableRemoteDesktop,
    DisableRemoteDesktop,
    ActivationLockBypassCode,
}

impl RequestType {
    /// Every fixed request type, in catalogue order
    pub const ALL: [RequestType; 21] = [
        Self::ProfileList,
        Self::ProvisioningProfileList,
        Self::CertificateList,
        Self::SecurityInfo,
        Self::RestartDevice,
        Self::ShutDownDevice,
        Self::StopMirroring,
        Self::ClearRestrictionsPassword,
        Self::UserList,
        Self::LogOutUser,
        Self::PlayLostModeSound,
        Self::DisableLostMode,
        Self::DeviceLocation,
        Self::ManagedMediaList,
        Self::DeviceConfigured,
        Self::AvailableOSUpdates,
        Self::NSExtensionMappings,
        Self::OSUpdateStatus,
        Self::EnableRemoteDesktop,
        Self::DisableRemoteDesktop,
        Self::ActivationLockBypassCode,
    ];

    /// Side-effect free queries eligible for random selection
    pub const READ_ONLY: [RequestType; 4] = [
        Self::SecurityInfo,
        Self::CertificateList,
        Self::ProfileList,
        Self::ProvisioningProfileList,
    ];

    /// The wire name used as the `RequestType` value
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ProfileList => "ProfileList",
            Self::ProvisioningProfileList => "ProvisioningProfileList",
            Self::CertificateList => "CertificateList",
            Self::SecurityInfo => "SecurityInfo",
            Self::RestartDevice => "RestartDevice",
            Self::ShutDownDevice => "ShutDownDevice",
            Self::StopMirroring => "StopMirroring",
            Self::ClearRestrictionsPassword => "ClearRestrictionsPassword",
            Self::UserList => "UserList",
            Self::LogOutUser => "LogOutUser",
            Self::PlayLostModeSound => "PlayLostModeSound",
            Self::DisableLostMode => "DisableLostMode",
            Self::DeviceLocation => "DeviceLocation",
            Self::ManagedMediaList => "ManagedMediaList",
            Self::DeviceConfigured => "DeviceConfigured",
            Self::AvailableOSUpdates => "AvailableOSUpdates",
            Self::NSExtensionMappings => "NSExtensionMappings",
            Self::OSUpdateStatus => "OSUpdateStatus",
            Self::EnableRemoteDesktop => "EnableRemoteDesktop",
            Self::DisableRemoteDesktop => "DisableRemoteDesktop",
            Self::ActivationLockBypassCode => "ActivationLockBypassCode",
        }
    }

    /// Whether this request type only reads device state
    pub fn is_read_only(&self) -> bool {
        Self::READ_ONLY.contains(self)
    }
}

impl fmt::Display for RequestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a name is not in the fixed catalogue
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown request type: {0}")]
pub struct UnknownRequestType(pub String);

impl FromStr for RequestType {
    type Err = UnknownRequestType;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|rt| rt.as_str() == s)
            .ok_or_else(|| UnknownRequestType(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_parse_back() {
        for rt in RequestType::ALL {
            assert_eq!(rt.as_str().parse::<RequestType>(), Ok(rt));
            assert_eq!(rt.to_string(), rt.as_str());
        }
    }

    #[test]
    fn test_catalogue_has_no_duplicates() {
        let names: HashSet<_> = RequestType::ALL.iter().map(|rt| rt.as_str()).collect();
        assert_eq!(names.len(), RequestType::ALL.len());
    }

    #[test]
    fn test_read_only_subset() {
        for rt in RequestType::READ_ONLY {
            assert!(RequestType::ALL.contains(&rt));
        }
        assert!(RequestType::SecurityInfo.is_read_only());
        assert!(!RequestType::RestartDevice.is_read_only());
        assert!(!RequestType::ActivationLockBypassCode.is_read_only());
    }

    #[test]
    fn test_unknown_name() {
        let err = "InstallApplication".parse::<RequestType>().unwrap_err();
        assert_eq!(err.to_string(), "unknown request type: InstallApplication");
        // matching is case sensitive
        assert!("profilelist".parse::<RequestType>().is_err());
    }
}
