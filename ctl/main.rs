#![forbid(unsafe_code)]

//! `sfptpdctl` — send a control command to a running sfptpd.
//!
//! All positional arguments are joined with single spaces and written as one
//! datagram to the daemon's control socket. The daemon interprets the text;
//! nothing is read back.

use tracing_subscriber::{fmt, EnvFilter};

use sfptpdctl::{cli, AppError, CommandTransmitter, Result};

fn main() {
    let transmitter = CommandTransmitter::default();

    let result = init_tracing().and_then(|()| cli::run(&transmitter, std::env::args_os()));
    if let Err(err) = result {
        eprintln!("Error: {err}");
        if matches!(err, AppError::Connection(_)) {
            eprintln!(
                "Is sfptpd running with control socket '{}'?",
                transmitter.endpoint().display()
            );
        }
        std::process::exit(1);
    }
}

fn init_tracing() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| AppError::Config(format!("failed to init tracing: {err}")))
}
