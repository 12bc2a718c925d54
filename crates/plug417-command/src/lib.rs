//! PLUG417 command language
//!
//! Turns short text commands into attribute settings for a PLUG417 module.
//! Each command names a group and sets keys within it:
//!
//! ```text
//! icon:n=1:on:x=100:y=20     small icon 1 on, at (100, 20)
//! temp:s=0:c=-15             Celsius, calibration offset -15
//! help:area                  describe the area analysis keys
//! ```
//!
//! Parsing never touches the device. The resulting `(Attribute, value)`
//! list is applied by the caller, typically through
//! `plug417_session::Session::set_all`.
//!
//! # Example
//!
//! ```rust,ignore
//! use plug417_command::{parse, ParsedCommand};
//!
//! match parse("menu:on:t=2")? {
//!     ParsedCommand::Settings(settings) => session.set_all(&settings)?,
//!     ParsedCommand::Help(topic) => print!("{}", plug417_command::help::render(&topic)?),
//! }
//! ```

mod error;
pub mod help;
mod parser;
mod table;

pub use error::*;
pub use parser::*;
pub use table::*;
