//! Command-line argument definitions and parsing
//!
//! Subcommand names match the MDM `RequestType` they generate, so the
//! subcommand enum is renamed verbatim rather than kebab-cased.

use clap::{Args, Parser, Subcommand, ValueEnum};
use mdmcmd::io::load_install_profile;
use mdmcmd::{Command, RequestType};
use std::path::PathBuf;

/// Main CLI application
#[derive(Parser, Debug)]
#[command(
    name = "mdmcmd",
    version,
    about = "MDM command generator",
    long_about = "mdmcmd builds a single MDM command, wraps it in an envelope with a \
                  CommandUUID, and writes it to standard output as a property list."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Command UUID (auto-generated if not specified)
    #[arg(short, long, value_name = "UUID")]
    pub uuid: Option<String>,

    /// Select a random simple command (only read-only, non-argument commands)
    #[arg(short, long)]
    pub random: bool,

    /// Property list encoding
    #[arg(short, long, value_enum, default_value = "xml")]
    pub format: OutputFormat,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Supported MDM commands
#[derive(Subcommand, Debug)]
#[command(rename_all = "verbatim")]
pub enum Commands {
    #[command(flatten)]
    Simple(SimpleCommand),
    /// DeviceInformation MDM command
    DeviceInformation(DeviceInformationArgs),
    /// InstallProfile MDM command
    InstallProfile(InstallProfileArgs),
    /// RemoveProfile MDM command
    RemoveProfile(RemoveProfileArgs),
    /// Arbitrary MDM command (simple non-argument command)
    #[command(name = "command")]
    Generic(GenericArgs),
}

/// MDM commands that take no arguments
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
#[command(rename_all = "verbatim")]
pub enum SimpleCommand {
    /// ProfileList MDM command
    ProfileList,
    /// ProvisioningProfileList MDM command
    ProvisioningProfileList,
    /// CertificateList MDM command
    CertificateList,
    /// SecurityInfo MDM command
    SecurityInfo,
    /// RestartDevice MDM command
    RestartDevice,
    /// ShutDownDevice MDM command
    ShutDownDevice,
    /// StopMirroring MDM command
    StopMirroring,
    /// ClearRestrictionsPassword MDM command
    ClearRestrictionsPassword,
    /// UserList MDM command
    UserList,
    /// LogOutUser MDM command
    LogOutUser,
    /// PlayLostModeSound MDM command
    PlayLostModeSound,
    /// DisableLostMode MDM command
    DisableLostMode,
    /// DeviceLocation MDM command
    DeviceLocation,
    /// ManagedMediaList MDM command
    ManagedMediaList,
    /// DeviceConfigured MDM command
    DeviceConfigured,
    /// AvailableOSUpdates MDM command
    AvailableOSUpdates,
    /// NSExtensionMappings MDM command
    NSExtensionMappings,
    /// OSUpdateStatus MDM command
    OSUpdateStatus,
    /// EnableRemoteDesktop MDM command
    EnableRemoteDesktop,
    /// DisableRemoteDesktop MDM command
    DisableRemoteDesktop,
    /// ActivationLockBypassCode MDM command
    ActivationLockBypassCode,
}

/// Arguments for the DeviceInformation command
#[derive(Args, Debug)]
pub struct DeviceInformationArgs {
    /// Optional DeviceInformation queries (ex. Model, OSVersion, etc.)
    #[arg(value_name = "QUERY")]
    pub query: Vec<String>,
}

/// Arguments for the InstallProfile command
#[derive(Args, Debug)]
pub struct InstallProfileArgs {
    /// Path to mobileconfig file (profile) to install
    #[arg(value_name = "MOBILECONFIG", value_parser = parse_profile)]
    pub mobileconfig: ProfileArg,
}

/// A profile file, read in full while the arguments are parsed
#[derive(Debug, Clone)]
pub struct ProfileArg {
    pub path: PathBuf,
    pub command: Command,
}

/// Arguments for the RemoveProfile command
#[derive(Args, Debug)]
pub struct RemoveProfileArgs {
    /// Identifier of profile to remove (ex. com.example.profile)
    pub identifier: String,
}

/// Arguments for the generic command
#[derive(Args, Debug)]
pub struct GenericArgs {
    /// Command RequestType (i.e. "SecurityInfo", "ProfileList", etc.)
    pub request_type: String,
}

/// Output encodings
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// XML property list
    Xml,
    /// Binary property list
    Binary,
}

fn parse_profile(s: &str) -> Result<ProfileArg, String> {
    let path = PathBuf::from(s);
    let command = load_install_profile(&path).map_err(|e| e.to_string())?;
    Ok(ProfileArg { path, command })
}

impl From<OutputFormat> for mdmcmd::PlistFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Xml => Self::Xml,
            OutputFormat::Binary => Self::Binary,
        }
    }
}

impl From<SimpleCommand> for RequestType {
    fn from(cmd: SimpleCommand) -> Self {
        match cmd {
            SimpleCommand::ProfileList => Self::ProfileList,
            SimpleCommand::ProvisioningProfileList => Self::ProvisioningProfileList,
            SimpleCommand::CertificateList => Self::CertificateList,
            SimpleCommand::SecurityInfo => Self::SecurityInfo,
            SimpleCommand::RestartDevice => Self::RestartDevice,
            SimpleCommand::ShutDownDevice => Self::ShutDownDevice,
            SimpleCommand::StopMirroring => Self::StopMirroring,
            SimpleCommand::ClearRestrictionsPassword => Self::ClearRestrictionsPassword,
            SimpleCommand::UserList => Self::UserList,
            SimpleCommand::LogOutUser => Self::LogOutUser,
            SimpleCommand::PlayLostModeSound => Self::PlayLostModeSound,
            SimpleCommand::DisableLostMode => Self::DisableLostMode,
            SimpleCommand::DeviceLocation => Self::DeviceLocation,
            SimpleCommand::ManagedMediaList => Self::ManagedMediaList,
            SimpleCommand::DeviceConfigured => Self::DeviceConfigured,
            SimpleCommand::AvailableOSUpdates => Self::AvailableOSUpdates,
            SimpleCommand::NSExtensionMappings => Self::NSExtensionMappings,
            SimpleCommand::OSUpdateStatus => Self::OSUpdateStatus,
            SimpleCommand::EnableRemoteDesktop => Self::EnableRemoteDesktop,
            SimpleCommand::DisableRemoteDesktop => Self::DisableRemoteDesktop,
            SimpleCommand::ActivationLockBypassCode => Self::ActivationLockBypassCode,
        }
    }
}
