//! Protocol error types.

use thiserror::Error;

/// Errors that can occur when working with the PLUG417 protocol.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// Bytes on the wire did not form a valid frame.
    #[error("framing error: {0}")]
    Framing(FramingError),

    /// Payload is too short for the layout it is decoded as.
    #[error("payload too short: expected at least {expected} bytes, got {actual}")]
    FrameTooShort {
        /// Expected minimum length.
        expected: usize,
        /// Actual length received.
        actual: usize,
    },

    /// Value is outside the declared domain of an attribute.
    #[error("{attribute} value {value} out of range {min}..={max}")]
    OutOfRange {
        /// Attribute name.
        attribute: &'static str,
        /// Rejected value.
        value: u32,
        /// Lowest accepted value.
        min: u32,
        /// Highest accepted value.
        max: u32,
    },

    /// Structurally invalid request, rejected before any I/O.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A page reply echoed a different functional class or page.
    #[error("unexpected page {functional}/{page}, expected {expected_functional}/{expected_page}")]
    UnexpectedPage {
        /// Echoed functional class.
        functional: u8,
        /// Echoed page.
        page: u8,
        /// Functional class the caller asked for.
        expected_functional: u8,
        /// Page the caller asked for.
        expected_page: u8,
    },
}

/// Reasons a candidate frame was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FramingError {
    /// Second header byte did not follow the first.
    BadHeader(u8),
    /// Length byte was zero.
    ZeroLength,
    /// Terminator byte was wrong.
    BadTerminator(u8),
    /// Checksum did not match the XOR of length and payload.
    BadChecksum {
        /// Checksum carried by the frame.
        received: u8,
        /// Checksum computed over length and payload.
        computed: u8,
    },
    /// Input ended before a complete frame.
    Truncated,
}

impl std::fmt::Display for FramingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FramingError::BadHeader(byte) => write!(f, "bad header byte 0x{:02X}", byte),
            FramingError::ZeroLength => write!(f, "zero length"),
            FramingError::BadTerminator(byte) => write!(f, "bad terminator 0x{:02X}", byte),
            FramingError::BadChecksum { received, computed } => write!(
                f,
                "checksum mismatch (received 0x{:02X}, computed 0x{:02X})",
                received, computed
            ),
            FramingError::Truncated => write!(f, "truncated frame"),
        }
    }
}

impl From<FramingError> for ProtocolError {
    fn from(err: FramingError) -> Self {
        ProtocolError::Framing(err)
    }
}

/// Result type for protocol operations.
pub type Result<T> = std::result::Result<T, ProtocolError>;
