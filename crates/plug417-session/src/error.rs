//! Session error types.

use std::time::Duration;

use plug417_protocol::ProtocolError;
use thiserror::Error;

/// Errors returned by a [`Session`](crate::Session).
#[derive(Error, Debug)]
pub enum SessionError {
    /// Transport read or write failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The serial port could not be opened or configured.
    #[error("serial port error: {0}")]
    Serial(#[from] serialport::Error),

    /// No valid frame arrived before the deadline.
    #[error("no reply within {0:?}")]
    Timeout(Duration),

    /// The device answered with a nonzero handshake.
    #[error("device rejected command (handshake code {0})")]
    Handshake(u8),

    /// Local validation or decoding failed.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),
}

/// Result type for session operations.
pub type Result<T> = std::result::Result<T, SessionError>;
