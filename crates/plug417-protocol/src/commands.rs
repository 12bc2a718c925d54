//! Command, query and handshake payloads.

use bytes::{Buf, BufMut};

use crate::constants::*;
use crate::error::{ProtocolError, Result};
use crate::frame::{Frame, WireFrame};

/// A set or query request: write `value` to `option` of a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Command {
    /// Functional class.
    pub functional: u8,
    /// Page within the functional class.
    pub page: u8,
    /// Option within the page.
    pub option: u8,
    /// Value, sent big-endian.
    pub value: u32,
}

impl Command {
    /// Create a set command.
    pub fn new(functional: u8, page: u8, option: u8, value: u32) -> Self {
        Command {
            functional,
            page,
            option,
            value,
        }
    }

    /// Create a request that reads back a page.
    pub fn query(functional: u8, page: u8) -> Self {
        Command::new(functional, page, OPTION_QUERY, 0)
    }

    /// Whether this command is a page query.
    pub fn is_query(&self) -> bool {
        self.option == OPTION_QUERY
    }

    /// Encode the payload bytes.
    pub fn encode(&self) -> [u8; COMMAND_PAYLOAD_SIZE] {
        let mut payload = [0u8; COMMAND_PAYLOAD_SIZE];
        {
            let mut buf = &mut payload[..];
            buf.put_u8(self.functional);
            buf.put_u8(self.page);
            buf.put_u8(self.option);
            buf.put_u32(self.value);
        }
        payload
    }

    /// Encode as a complete frame ready for the wire.
    pub fn to_wire(&self) -> WireFrame {
        Frame::from_valid(&self.encode()).to_wire()
    }

    /// Decode a command payload.
    pub fn decode(payload: &[u8]) -> Result<Self> {
        if payload.len() != COMMAND_PAYLOAD_SIZE {
            return Err(ProtocolError::FrameTooShort {
                expected: COMMAND_PAYLOAD_SIZE,
                actual: payload.len(),
            });
        }
        let mut buf = payload;
        Ok(Command {
            functional: buf.get_u8(),
            page: buf.get_u8(),
            option: buf.get_u8(),
            value: buf.get_u32(),
        })
    }
}

/// Single-byte acknowledge or reject reply to a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Handshake {
    /// 0 on success, device error code otherwise.
    pub option: u8,
}

impl Handshake {
    /// Interpret a payload as a handshake, if it has handshake size.
    pub fn from_payload(payload: &[u8]) -> Option<Self> {
        match payload {
            [option] => Some(Handshake { option: *option }),
            _ => None,
        }
    }

    /// Whether the device accepted the command.
    pub fn is_ok(&self) -> bool {
        self.option == HANDSHAKE_OK
    }

    /// Payload bytes.
    pub fn encode(&self) -> [u8; HANDSHAKE_PAYLOAD_SIZE] {
        [self.option]
    }

    /// Wrap in a frame.
    pub fn to_frame(&self) -> Frame {
        Frame::from_valid(&self.encode())
    }
}

/// A page read back from the device: echoed functional/page plus raw contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryReply<'a> {
    /// Echoed functional class.
    pub functional: u8,
    /// Echoed page.
    pub page: u8,
    /// Page contents (one or more bytes).
    pub contents: &'a [u8],
}

impl<'a> QueryReply<'a> {
    /// Split a reply payload into its echo and contents.
    pub fn parse(payload: &'a [u8]) -> Result<Self> {
        if payload.len() < 3 {
            return Err(ProtocolError::FrameTooShort {
                expected: 3,
                actual: payload.len(),
            });
        }
        Ok(QueryReply {
            functional: payload[0],
            page: payload[1],
            contents: &payload[2..],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_encode() {
        let cmd = Command::new(FUNCTIONAL_VIDEO, PAGE_ANALOG_VIDEO, OPTION_PSEUDO_COLOR, 0x0102_0304);
        assert_eq!(cmd.encode(), [0x02, 0x00, 0x04, 0x01, 0x02, 0x03, 0x04]);
        assert_eq!(Command::decode(&cmd.encode()).unwrap(), cmd);
    }

    #[test]
    fn test_command_wire() {
        let cmd = Command::new(FUNCTIONAL_VIDEO, PAGE_ANALOG_VIDEO, OPTION_PSEUDO_COLOR, 9);
        assert_eq!(
            cmd.to_wire().as_bytes(),
            &[0x55, 0xAA, 0x07, 0x02, 0x00, 0x04, 0x00, 0x00, 0x00, 0x09, 0x08, 0xF0]
        );
    }

    #[test]
    fn test_query_command() {
        let cmd = Command::query(FUNCTIONAL_VIDEO, PAGE_DIGITAL_VIDEO);
        assert!(cmd.is_query());
        assert_eq!(cmd.encode(), [0x02, 0x01, OPTION_QUERY, 0, 0, 0, 0]);
    }

    #[test]
    fn test_command_decode_wrong_size() {
        assert!(matches!(
            Command::decode(&[1, 2, 3]),
            Err(ProtocolError::FrameTooShort { expected: 7, actual: 3 })
        ));
    }

    #[test]
    fn test_handshake() {
        assert!(Handshake::from_payload(&[0]).unwrap().is_ok());
        assert!(!Handshake::from_payload(&[3]).unwrap().is_ok());
        assert!(Handshake::from_payload(&[0, 0]).is_none());
        assert_eq!(Handshake { option: 0 }.to_frame().to_wire().as_bytes(), &[0x55, 0xAA, 0x01, 0x00, 0x01, 0xF0]);
    }

    #[test]
    fn test_query_reply_parse() {
        let reply = QueryReply::parse(&[2, 1, 9, 8, 7]).unwrap();
        assert_eq!(reply.functional, 2);
        assert_eq!(reply.page, 1);
        assert_eq!(reply.contents, &[9, 8, 7]);
        assert!(QueryReply::parse(&[2, 1]).is_err());
    }
}
