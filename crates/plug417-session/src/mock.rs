//! In-memory transports for tests.
//!
//! [`MockTransport`] replays scripted reads and records writes.
//! [`MockDevice`] decodes what the host writes and answers like a module:
//! handshakes for set commands and stored pages for queries.

use std::collections::{HashMap, VecDeque};
use std::io;

use plug417_protocol::{Command, Frame, FrameDecoder, Handshake, Page, HANDSHAKE_OK};

use crate::transport::Transport;

/// Scripted transport.
///
/// Each queued chunk is returned by one read (split if the caller's buffer
/// is smaller). Once the script runs out reads return 0.
#[derive(Debug, Default)]
pub struct MockTransport {
    reads: VecDeque<io::Result<Vec<u8>>>,
    written: Vec<u8>,
    writes: usize,
    fail_writes: bool,
}

impl MockTransport {
    /// Empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue bytes for one read.
    pub fn push_read(&mut self, bytes: &[u8]) -> &mut Self {
        self.reads.push_back(Ok(bytes.to_vec()));
        self
    }

    /// Queue a read that fails.
    pub fn push_error(&mut self, kind: io::ErrorKind) -> &mut Self {
        self.reads.push_back(Err(io::Error::from(kind)));
        self
    }

    /// Make every write fail.
    pub fn fail_writes(&mut self, fail: bool) -> &mut Self {
        self.fail_writes = fail;
        self
    }

    /// Everything written so far.
    pub fn written(&self) -> &[u8] {
        &self.written
    }

    /// Number of completed writes.
    pub fn write_count(&self) -> usize {
        self.writes
    }
}

impl Transport for MockTransport {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self.reads.pop_front() {
            None => Ok(0),
            Some(Err(e)) => Err(e),
            Some(Ok(chunk)) => {
                let n = chunk.len().min(buf.len());
                buf[..n].copy_from_slice(&chunk[..n]);
                if n < chunk.len() {
                    self.reads.push_front(Ok(chunk[n..].to_vec()));
                }
                Ok(n)
            }
        }
    }

    fn write_all(&mut self, data: &[u8]) -> io::Result<()> {
        if self.fail_writes {
            return Err(io::Error::from(io::ErrorKind::BrokenPipe));
        }
        self.written.extend_from_slice(data);
        self.writes += 1;
        Ok(())
    }
}

/// A simulated module.
#[derive(Debug, Default)]
pub struct MockDevice {
    decoder: FrameDecoder,
    pages: HashMap<(u8, u8), Frame>,
    outbox: VecDeque<u8>,
    commands: Vec<Command>,
    reject: Option<u8>,
    silent: bool,
    read_limit: Option<usize>,
}

impl MockDevice {
    /// Device with no pages that acknowledges every command.
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer queries for `P` with `page`.
    pub fn with_page<P: Page>(mut self, page: P) -> Self {
        self.pages.insert((P::FUNCTIONAL, P::PAGE), page.to_reply());
        self
    }

    /// Answer set commands with handshake `code` instead of success.
    pub fn reject_with(mut self, code: u8) -> Self {
        self.reject = Some(code);
        self
    }

    /// Never answer.
    pub fn silent(mut self) -> Self {
        self.silent = true;
        self
    }

    /// Return at most `limit` bytes per read.
    pub fn read_limit(mut self, limit: usize) -> Self {
        self.read_limit = Some(limit.max(1));
        self
    }

    /// Queue raw bytes ahead of the next reply.
    pub fn inject(&mut self, bytes: &[u8]) {
        self.outbox.extend(bytes);
    }

    /// Commands received so far, queries included.
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    fn reply_to(&mut self, command: Command) {
        if self.silent {
            return;
        }
        let reply = if command.is_query() {
            match self.pages.get(&(command.functional, command.page)) {
                Some(frame) => *frame,
                None => Handshake { option: 1 }.to_frame(),
            }
        } else {
            Handshake {
                option: self.reject.unwrap_or(HANDSHAKE_OK),
            }
            .to_frame()
        };
        self.outbox.extend(reply.to_wire().as_bytes());
    }
}

impl Transport for MockDevice {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let limit = self.read_limit.unwrap_or(buf.len()).min(buf.len());
        let n = limit.min(self.outbox.len());
        for (slot, byte) in buf.iter_mut().zip(self.outbox.drain(..n)) {
            *slot = byte;
        }
        Ok(n)
    }

    fn write_all(&mut self, data: &[u8]) -> io::Result<()> {
        let mut rest = data;
        loop {
            let (used, frame) = self.decoder.decode(rest);
            rest = &rest[used..];
            match frame {
                Some(frame) => {
                    if let Ok(command) = Command::decode(frame.payload()) {
                        self.commands.push(command);
                        self.reply_to(command);
                    }
                }
                None if rest.is_empty() && !self.decoder.has_pending() => return Ok(()),
                None => {}
            }
        }
    }
}
