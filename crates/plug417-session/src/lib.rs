//! PLUG417 session
//!
//! A blocking, single-owner request/reply engine on top of
//! [`plug417_protocol`]. A [`Session`] owns one [`Transport`] and one frame
//! decoder, sends a command, then polls the transport until a valid frame
//! arrives or the deadline passes. Nothing is retried; timeouts and device
//! rejections are returned to the caller.
//!
//! # Example
//!
//! ```rust,ignore
//! use plug417_protocol::Palette;
//! use plug417_session::{Session, SessionConfig};
//!
//! let mut session = Session::open(SessionConfig::default())?;
//! let status = session.query_status()?;
//! println!("{} at {:.2}", status.module_id, status.focal_spot_celsius());
//! session.set_pseudo_color(Palette::IronRed)?;
//! ```

mod config;
mod error;
pub mod mock;
mod session;
mod setters;
mod transport;

pub use config::*;
pub use error::*;
pub use session::*;
pub use transport::*;
