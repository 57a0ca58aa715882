//! CLI command handlers that bridge CLI arguments to library operations

use crate::cli_bin::args::*;
use log::{debug, info};
use mdmcmd::error::{MdmCmdError, Result};
use mdmcmd::{Command, CommandEnvelope, EnvelopeWriter};
use rand::Rng;

/// Generate the requested command and write it to stdout
pub fn run(cli: Cli) -> Result<()> {
    let command = select_command(cli.command, cli.random, &mut rand::thread_rng())?;
    info!("Generating {} command", command.request_type());

    let envelope = CommandEnvelope::new(cli.uuid, &command);
    debug!("CommandUUID: {}", envelope.command_uuid());

    EnvelopeWriter::with_format(cli.format.into()).write_stdout(&envelope)
}

/// Resolve the subcommand or `--random` into a command body.
///
/// Exactly one of the two must be present.
pub fn select_command<R: Rng + ?Sized>(
    command: Option<Commands>,
    random: bool,
    rng: &mut R,
) -> Result<Command> {
    match (command, random) {
        (None, false) => Err(MdmCmdError::usage(
            "a command or --random must be specified",
        )),
        (Some(_), true) => Err(MdmCmdError::usage(
            "a command and --random are mutually exclusive",
        )),
        (None, true) => Ok(Command::random(rng)),
        (Some(cmd), false) => Ok(build_command(cmd)),
    }
}

/// Build the command body for an explicit subcommand.
///
/// Profiles are already read by the argument parser, so this cannot fail.
pub fn build_command(command: Commands) -> Command {
    match command {
        Commands::Simple(simple) => Command::simple(simple.into()),
        Commands::DeviceInformation(args) => Command::device_information(args.query),
        Commands::InstallProfile(args) => {
            debug!("Using profile {}", args.mobileconfig.path.display());
            args.mobileconfig.command
        }
        Commands::RemoveProfile(args) => Command::remove_profile(args.identifier),
        Commands::Generic(args) => Command::unchecked(args.request_type),
    }
}
