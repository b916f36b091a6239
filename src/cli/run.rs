use anyhow::{Result, bail};

use super::{
    args::{Arguments, Command},
    commands::{
        CommandResult, init::init, scan::scan, stats::stats, unused_keys::unused_keys,
        validate::validate,
    },
};

/// Dispatch to the handler for the parsed subcommand.
///
/// # Returns
/// - `Ok(CommandResult)` with findings, counts and exit behavior
/// - `Err` if the command fails (invalid config, missing source root, ...)
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Scan(cmd)) => scan(cmd),
        Some(Command::Stats(cmd)) => stats(cmd),
        Some(Command::UnusedKeys(cmd)) => unused_keys(cmd),
        Some(Command::Validate(cmd)) => validate(cmd),
        Some(Command::Init) => init(),
        None => bail!("No command provided. Use --help to see available commands."),
    }
}
