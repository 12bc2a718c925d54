//! Byte transports.
//!
//! The session only needs two things from the link: read whatever bytes are
//! available (possibly none) and write a whole buffer or fail.

use std::io::{self, Read, Write};
use std::time::Duration;

use serialport::{DataBits, FlowControl, Parity, SerialPort, StopBits};

/// A byte pipe to the device.
pub trait Transport {
    /// Read up to `buf.len()` bytes. `Ok(0)` means nothing arrived yet.
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize>;

    /// Write all of `data` or fail.
    fn write_all(&mut self, data: &[u8]) -> io::Result<()>;
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        (**self).read(buf)
    }

    fn write_all(&mut self, data: &[u8]) -> io::Result<()> {
        (**self).write_all(data)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        (**self).read(buf)
    }

    fn write_all(&mut self, data: &[u8]) -> io::Result<()> {
        (**self).write_all(data)
    }
}

/// Adapts any `Read + Write` stream with a read timeout.
///
/// A read that times out or would block counts as "no data yet".
#[derive(Debug)]
pub struct StreamTransport<S> {
    inner: S,
}

impl<S: Read + Write> StreamTransport<S> {
    /// Wrap a stream.
    pub fn new(inner: S) -> Self {
        StreamTransport { inner }
    }

    /// Underlying stream.
    pub fn get_ref(&self) -> &S {
        &self.inner
    }

    /// Unwrap the stream.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: Read + Write> Transport for StreamTransport<S> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self.inner.read(buf) {
            Ok(n) => Ok(n),
            Err(e)
                if matches!(
                    e.kind(),
                    io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock | io::ErrorKind::Interrupted
                ) =>
            {
                Ok(0)
            }
            Err(e) => Err(e),
        }
    }

    fn write_all(&mut self, data: &[u8]) -> io::Result<()> {
        self.inner.write_all(data)?;
        self.inner.flush()
    }
}

/// Transport over a serial port.
pub type SerialTransport = StreamTransport<Box<dyn SerialPort>>;

/// Open `path` raw, 8N1, no flow control.
pub fn open_serial(path: &str, baud_rate: u32, read_timeout: Duration) -> serialport::Result<SerialTransport> {
    let port = serialport::new(path, baud_rate)
        .data_bits(DataBits::Eight)
        .parity(Parity::None)
        .stop_bits(StopBits::One)
        .flow_control(FlowControl::None)
        .timeout(read_timeout)
        .open()?;
    Ok(StreamTransport::new(port))
}
