//! Argument handling for the `sfptpdctl` binary.
//!
//! The daemon owns the command grammar, so the binary recognises no options
//! of its own: every argument after the program name, `--help` and `--` included,
//! is a command token.

use std::ffi::OsString;
use std::iter;

use clap::Parser;
use tracing::debug;

use crate::payload::CommandPayload;
use crate::transmitter::CommandTransmitter;
use crate::{AppError, Result};

/// Program name used when argv is empty.
const PROGRAM_NAME: &str = "sfptpdctl";

/// Escape placed ahead of the user's arguments so clap takes all of them,
/// including a literal `--`, as positional values.
const ESCAPE: &str = "--";

#[derive(Debug, Parser)]
#[command(
    name = "sfptpdctl",
    about = "Send a control command to the sfptpd daemon",
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Cli {
    /// Command tokens, sent verbatim and space-separated.
    #[arg(value_name = "TOKENS", trailing_var_arg = true, allow_hyphen_values = true)]
    tokens: Vec<OsString>,
}

/// Extract the command tokens from a full argv (program name first).
///
/// # Errors
///
/// Returns `AppError::Config` if clap rejects the argument vector.
pub fn parse_tokens<I, T>(args: I) -> Result<Vec<OsString>>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::into);
    let program = args.next().unwrap_or_else(|| PROGRAM_NAME.into());
    let argv = iter::once(program)
        .chain(iter::once(OsString::from(ESCAPE)))
        .chain(args);

    let cli = Cli::try_parse_from(argv)
        .map_err(|err| AppError::Config(format!("invalid arguments: {err}")))?;
    Ok(cli.tokens)
}

/// Send the command named by `args` (program name first) through `transmitter`.
///
/// # Errors
///
/// Returns `AppError::Encoding` for a non-UTF-8 argument, otherwise whatever
/// [`CommandTransmitter::send_payload`] reports.
pub fn run<I, T>(transmitter: &CommandTransmitter, args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let payload = CommandPayload::from_os_tokens(parse_tokens(args)?)?;
    debug!(
        socket = %transmitter.endpoint().display(),
        command = %payload,
        "sending control command"
    );
    transmitter.send_payload(&payload)
}
