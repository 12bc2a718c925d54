//! The request/reply engine.

use std::time::{Duration, Instant};

use plug417_protocol::{
    Attribute, Command, DecodedPage, DecoderStats, Frame, FrameDecoder, Handshake, Page, ProtocolError,
    Status, FUNCTIONAL_MAX, OPTION_QUERY,
};
use tracing::{debug, trace, warn, Span};

use crate::config::{DumpLevel, SessionConfig};
use crate::error::{Result, SessionError};
use crate::transport::{open_serial, SerialTransport, Transport};

/// Bytes requested from the transport per read.
const READ_CHUNK_SIZE: usize = 64;

/// Sleep between reads that returned nothing.
const IDLE_POLL: Duration = Duration::from_millis(1);

/// A blocking session with one device.
///
/// One request is in flight at a time. The session owns the transport and
/// the decoder state; bytes read past the end of a reply are kept for the
/// next [`receive`](Self::receive).
pub struct Session<T> {
    transport: T,
    decoder: FrameDecoder,
    rx: [u8; READ_CHUNK_SIZE],
    rx_start: usize,
    rx_end: usize,
    config: SessionConfig,
    span: Span,
}

impl Session<SerialTransport> {
    /// Open the serial device named in `config`.
    pub fn open(config: SessionConfig) -> Result<Self> {
        let transport = open_serial(&config.device, config.baud_rate, config.read_timeout())?;
        debug!("opened {} at {} baud", config.device, config.baud_rate);
        Ok(Session::new(transport, config))
    }
}

impl<T: Transport> Session<T> {
    /// Create a session over an already open transport.
    pub fn new(transport: T, config: SessionConfig) -> Self {
        let span = tracing::debug_span!("plug417", device = %config.device);
        Session {
            transport,
            decoder: FrameDecoder::new(),
            rx: [0u8; READ_CHUNK_SIZE],
            rx_start: 0,
            rx_end: 0,
            config,
            span,
        }
    }

    /// Session configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Decoder counters.
    pub fn stats(&self) -> DecoderStats {
        self.decoder.stats()
    }

    /// Underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Underlying transport, mutably.
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Close the session and return the transport.
    pub fn into_inner(self) -> T {
        self.transport
    }

    /// Encode and write one command.
    pub fn send(&mut self, functional: u8, page: u8, option: u8, value: u32) -> Result<()> {
        let _guard = self.span.clone().entered();
        let wire = Command::new(functional, page, option, value).to_wire();
        self.dump("tx", wire.as_bytes());
        self.transport.write_all(wire.as_bytes())?;
        Ok(())
    }

    /// Wait up to `deadline` for the next valid frame.
    ///
    /// Corrupt input is skipped. Reads that return no bytes are retried until
    /// the deadline passes. On timeout any partly assembled frame is dropped;
    /// complete frames already read stay buffered.
    pub fn receive(&mut self, deadline: Duration) -> Result<Frame> {
        let _guard = self.span.clone().entered();
        let started = Instant::now();
        loop {
            if self.rx_start < self.rx_end || self.decoder.has_pending() {
                let (used, frame) = self.decoder.decode(&self.rx[self.rx_start..self.rx_end]);
                self.rx_start += used;
                if let Some(frame) = frame {
                    self.dump("rx", frame.to_wire().as_bytes());
                    return Ok(frame);
                }
            }

            let elapsed = started.elapsed();
            if elapsed >= deadline {
                debug!(
                    "no frame after {:?} ({} bytes in progress)",
                    elapsed,
                    self.decoder.in_progress()
                );
                // A partial candidate would otherwise swallow the next reply.
                self.decoder.reset();
                return Err(SessionError::Timeout(deadline));
            }

            let n = self.transport.read(&mut self.rx)?;
            self.rx_start = 0;
            self.rx_end = n;
            if n == 0 {
                std::thread::sleep(IDLE_POLL.min(deadline - elapsed));
            } else {
                trace!("read {} bytes", n);
            }
        }
    }

    /// Send a command and wait for its reply.
    ///
    /// A one-byte reply is a handshake and a nonzero code is an error. Any
    /// other reply is returned as is.
    pub fn request(&mut self, functional: u8, page: u8, option: u8, value: u32) -> Result<Frame> {
        self.send(functional, page, option, value)?;
        let frame = self.receive(self.config.timeout())?;
        if let Some(handshake) = Handshake::from_payload(frame.payload()) {
            if !handshake.is_ok() {
                warn!(
                    "command {}/{}/{} rejected with code {}",
                    functional, page, option, handshake.option
                );
                return Err(SessionError::Handshake(handshake.option));
            }
        }
        Ok(frame)
    }

    /// Read back a page.
    pub fn query(&mut self, functional: u8, page: u8) -> Result<Frame> {
        if functional > FUNCTIONAL_MAX {
            return Err(ProtocolError::InvalidArgument(format!(
                "functional class {} out of range 0..={}",
                functional, FUNCTIONAL_MAX
            ))
            .into());
        }
        self.request(functional, page, OPTION_QUERY, 0)
    }

    /// Query and decode a page of known layout.
    pub fn query_page<P: Page>(&mut self) -> Result<P> {
        let frame = self.query(P::FUNCTIONAL, P::PAGE)?;
        debug!("{} page: {} bytes", P::NAME, frame.len());
        Ok(P::from_reply(frame.payload())?)
    }

    /// Query the status report.
    pub fn query_status(&mut self) -> Result<Status> {
        self.query_page::<Status>()
    }

    /// Query any page and decode it by the layout its reply names.
    pub fn query_any(&mut self, functional: u8, page: u8) -> Result<DecodedPage> {
        let frame = self.query(functional, page)?;
        Ok(DecodedPage::from_reply(frame.payload())?)
    }

    /// Set an attribute.
    ///
    /// Out of range values are rejected before anything is written.
    pub fn set(&mut self, attribute: Attribute, value: u32) -> Result<()> {
        let command = attribute.command(value)?;
        debug!("set {} = {}", attribute, value);
        let frame = self.request(command.functional, command.page, command.option, command.value)?;
        if frame.len() != 1 {
            debug!("set {} answered with a {} byte reply", attribute, frame.len());
        }
        Ok(())
    }

    fn dump(&self, direction: &str, bytes: &[u8]) {
        match self.config.dump_frames {
            DumpLevel::Off => {}
            DumpLevel::Debug => debug!("{} {}", direction, hex::encode(bytes)),
            DumpLevel::Trace => trace!("{} {}", direction, hex::encode(bytes)),
        }
    }
}

impl<T> std::fmt::Debug for Session<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("device", &self.config.device)
            .field("decoder", &self.decoder)
            .field("buffered", &(self.rx_end - self.rx_start))
            .finish()
    }
}
