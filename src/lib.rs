#![forbid(unsafe_code)]

//! `sfptpdctl` — control-plane client for the sfptpd daemon.
//!
//! Joins command tokens with spaces and sends them as a single datagram to
//! the daemon's UNIX domain control socket. There is no reply channel.

pub mod cli;
pub mod config;
pub mod errors;
pub mod payload;
pub mod transmitter;

pub use config::{CtlConfig, DEFAULT_SOCKET_PATH};
pub use errors::{AppError, Result};
pub use payload::CommandPayload;
pub use transmitter::{send_command, CommandTransmitter};
