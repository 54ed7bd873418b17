//! One-shot command transmitter for the daemon's datagram control socket.
//!
//! Each send opens an unbound UNIX datagram socket, connects it to the
//! control endpoint, writes one datagram and drops the socket. Nothing is
//! read back: success only means the local kernel accepted the datagram.

use std::io;
use std::os::unix::net::UnixDatagram;
use std::path::{Path, PathBuf};

use tracing::{debug, info_span};

use crate::config::{CtlConfig, DEFAULT_SOCKET_PATH};
use crate::payload::CommandPayload;
use crate::{AppError, Result};

/// Sends control commands to a fixed endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandTransmitter {
    endpoint: PathBuf,
}

impl Default for CommandTransmitter {
    fn default() -> Self {
        Self::new(DEFAULT_SOCKET_PATH)
    }
}

impl CommandTransmitter {
    /// Construct a transmitter targeting `endpoint`.
    #[must_use]
    pub fn new(endpoint: impl Into<PathBuf>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    /// Construct a transmitter targeting the configured socket path.
    #[must_use]
    pub fn from_config(config: &CtlConfig) -> Self {
        Self::new(config.socket_path())
    }

    /// Path of the control socket this transmitter sends to.
    #[must_use]
    pub fn endpoint(&self) -> &Path {
        &self.endpoint
    }

    /// Join `tokens` with single spaces and send them as one datagram.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Connection` if the endpoint is missing or has no
    /// listener, and `AppError::Transmission` if the datagram is rejected.
    pub fn send_command<I, S>(&self, tokens: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.send_payload(&CommandPayload::from_tokens(tokens))
    }

    /// Send an already assembled payload as one datagram.
    ///
    /// # Errors
    ///
    /// See [`CommandTransmitter::send_command`].
    pub fn send_payload(&self, payload: &CommandPayload) -> Result<()> {
        let span = info_span!(
            "send_command",
            endpoint = %self.endpoint.display(),
            bytes = payload.len()
        );
        let _guard = span.enter();

        match self.transmit(payload) {
            Ok(()) => {
                debug!("control datagram accepted");
                Ok(())
            }
            Err(err) => {
                debug!(%err, "control command failed");
                Err(err)
            }
        }
    }

    fn transmit(&self, payload: &CommandPayload) -> Result<()> {
        // Dropping the socket closes it on every return path below.
        let socket = UnixDatagram::unbound().map_err(|err| {
            AppError::Transmission(format!("failed to open datagram socket: {err}"))
        })?;

        socket
            .connect(&self.endpoint)
            .map_err(|err| connect_error(&self.endpoint, &err))?;

        let sent = socket.send(payload.as_bytes()).map_err(|err| {
            AppError::Transmission(format!(
                "failed to send {} bytes to {}: {err}",
                payload.len(),
                self.endpoint.display()
            ))
        })?;

        if sent != payload.len() {
            return Err(AppError::Transmission(format!(
                "short write to {}: sent {sent} of {} bytes",
                self.endpoint.display(),
                payload.len()
            )));
        }

        Ok(())
    }
}

/// Send `tokens` to the daemon's default control socket.
///
/// # Errors
///
/// See [`CommandTransmitter::send_command`].
pub fn send_command<I, S>(tokens: I) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    CommandTransmitter::default().send_command(tokens)
}

/// Classify a failed `connect`. Permission problems are a transmission
/// failure; everything else means nobody is listening at `endpoint`.
fn connect_error(endpoint: &Path, err: &io::Error) -> AppError {
    if err.kind() == io::ErrorKind::PermissionDenied {
        AppError::Transmission(format!(
            "permission denied on {}: {err}",
            endpoint.display()
        ))
    } else {
        AppError::Connection(format!(
            "cannot reach control socket {}: {err}",
            endpoint.display()
        ))
    }
}
