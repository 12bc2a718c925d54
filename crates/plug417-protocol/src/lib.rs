//! PLUG417 serial protocol
//!
//! Types and codecs for talking to a PLUG417 thermal imaging module over its
//! serial control port.
//!
//! # Protocol Overview
//!
//! Every message is a frame `55 AA LEN PAYLOAD.. CS F0`, where `CS` is the
//! XOR of `LEN` and all payload bytes. The payload is interpreted from
//! context:
//!
//! - **Commands** (host → module): `functional, page, option, value:u32be`
//! - **Queries** (host → module): a command whose option is [`OPTION_QUERY`]
//! - **Handshakes** (module → host): a single byte, 0 on success
//! - **Page replies** (module → host): echoed `functional, page` followed by
//!   the page contents, decoded through a [`Page`] descriptor
//!
//! # Example
//!
//! ```rust,ignore
//! use plug417_protocol::{Attribute, FrameDecoder, Page, Status};
//!
//! // Build a command
//! let wire = Attribute::PseudoColor.command(9)?.to_wire();
//!
//! // Parse a reply
//! let mut decoder = FrameDecoder::new();
//! let (_, frame) = decoder.decode(&received_data);
//! let status = Status::from_reply(frame.unwrap().payload())?;
//! ```

mod addressing;
mod commands;
mod constants;
mod error;
mod frame;
mod pages;
mod types;

pub use addressing::*;
pub use commands::*;
pub use constants::*;
pub use error::*;
pub use frame::*;
pub use pages::*;
pub use types::*;
